use serde::{Deserialize, Serialize};

/// The named clock times of a daily snapshot.
///
/// Serialized with the upstream's capitalized keys, which is also the
/// contract the UI consumes. Unknown upstream keys (Imsak, Midnight, ...)
/// are dropped during normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrayerTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Sunset")]
    pub sunset: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekdayName {
    pub en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthName {
    pub number: u32,
    pub en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDate {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub day: String,
    pub weekday: WeekdayName,
    pub month: MonthName,
    pub year: String,
}

/// Date block of a snapshot: the same day expressed both ways.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotDate {
    pub readable: String,
    pub timestamp: String,
    pub hijri: CalendarDate,
    pub gregorian: CalendarDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationMethod {
    pub id: u32,
    pub name: String,
}

/// Query metadata echoed by the upstream timings service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotMeta {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub method: CalculationMethod,
}

/// One prayer-times snapshot for a (location, date) query.
///
/// Exactly one snapshot exists per query; snapshots are re-fetched,
/// never merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrayerTimesSnapshot {
    pub timings: PrayerTimings,
    pub date: SnapshotDate,
    pub meta: SnapshotMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timings_roundtrip_capitalized_keys() {
        let json = serde_json::json!({
            "Fajr": "04:36",
            "Sunrise": "05:55",
            "Dhuhr": "11:54",
            "Asr": "15:15",
            "Sunset": "17:52",
            "Maghrib": "17:52",
            "Isha": "19:04",
            "Imsak": "04:26",
            "Midnight": "23:54"
        });
        let timings: PrayerTimings = serde_json::from_value(json).unwrap();
        assert_eq!(timings.fajr, "04:36");
        assert_eq!(timings.isha, "19:04");

        let out = serde_json::to_value(&timings).unwrap();
        assert_eq!(out["Maghrib"], "17:52");
        // Keys outside the contract are not re-emitted
        assert!(out.get("Imsak").is_none());
    }
}
