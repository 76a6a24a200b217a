use chrono::{NaiveTime, Timelike};
use shared::PrayerTimings;

/// Hijri month names in the order of the calendar
pub const HIJRI_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi'ul Awwal",
    "Rabi'ul Akhir",
    "Jumadal Awwal",
    "Jumadal Akhir",
    "Rajab",
    "Sya'ban",
    "Ramadan",
    "Syawwal",
    "Dzulqidah",
    "Dzulhijjah",
];

pub fn hijri_month_name(month: u32) -> Option<&'static str> {
    HIJRI_MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// Indonesian display name for an upstream prayer key
pub fn prayer_name_id(name: &str) -> &str {
    match name {
        "Fajr" => "Subuh",
        "Dhuhr" => "Dzuhur",
        "Asr" => "Ashar",
        "Maghrib" => "Maghrib",
        "Isha" => "Isya",
        "Sunrise" => "Terbit",
        "Sunset" => "Terbenam",
        other => other,
    }
}

/// The next obligatory prayer and the minutes remaining until it.
///
/// After Isha the countdown wraps to tomorrow's Fajr.
pub fn next_prayer(timings: &PrayerTimings, now: NaiveTime) -> (String, i64) {
    let order = [
        ("Fajr", &timings.fajr),
        ("Dhuhr", &timings.dhuhr),
        ("Asr", &timings.asr),
        ("Maghrib", &timings.maghrib),
        ("Isha", &timings.isha),
    ];

    for (name, clock) in order {
        if let Some(time) = parse_clock(clock) {
            if time > now {
                return (
                    prayer_name_id(name).to_string(),
                    minutes_between(now, time),
                );
            }
        }
    }

    // Every prayer has passed; count to tomorrow's Fajr
    let minutes = match parse_clock(&timings.fajr) {
        Some(fajr) => 24 * 60 - minutes_between(fajr, now),
        None => 0,
    };
    ("Subuh (Besok)".to_string(), minutes)
}

fn parse_clock(clock: &str) -> Option<NaiveTime> {
    // Aladhan sometimes suffixes the timezone, e.g. "04:36 (WIB)"
    let clock = clock.split_whitespace().next()?;
    NaiveTime::parse_from_str(clock, "%H:%M").ok()
}

fn minutes_between(earlier: NaiveTime, later: NaiveTime) -> i64 {
    (later.num_seconds_from_midnight() as i64 - earlier.num_seconds_from_midnight() as i64) / 60
}

/// Recurring dates of the Islamic year worth surfacing on the calendar
pub fn important_dates() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        (
            "1 Muharram",
            "Tahun Baru Hijriah",
            "Awal tahun baru dalam kalender Islam",
        ),
        (
            "10 Muharram",
            "Hari Asyura",
            "Hari puasa sunnah yang sangat dianjurkan",
        ),
        (
            "12 Rabi'ul Awwal",
            "Maulid Nabi Muhammad SAW",
            "Memperingati kelahiran Rasulullah SAW",
        ),
        (
            "27 Rajab",
            "Isra Mi'raj",
            "Memperingati perjalanan malam Rasulullah SAW",
        ),
        (
            "15 Sya'ban",
            "Nisfu Sya'ban",
            "Malam yang penuh berkah dan ampunan",
        ),
        (
            "1-30 Ramadan",
            "Bulan Ramadan",
            "Bulan suci puasa bagi umat Islam",
        ),
        (
            "1 Syawwal",
            "Idul Fitri",
            "Hari raya setelah bulan Ramadan",
        ),
        ("10 Dzulhijjah", "Idul Adha", "Hari raya kurban"),
    ]
}
