pub mod config;
pub mod error;
pub mod fallback;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod docs;
pub mod openapi;
pub mod third_party;

pub mod quran {
    pub mod controller;
    pub mod provider;
    pub mod usecase;

    pub use provider::QuranProvider;
    pub use usecase::{QuranUseCase, QuranUseCaseImpl};
}

pub mod prayer {
    pub mod controller;
    pub mod provider;
    pub mod usecase;

    pub use provider::DuaProvider;
    pub use usecase::{PrayerUseCase, PrayerUseCaseImpl};
}

pub mod prayer_times {
    pub mod controller;
    pub mod provider;
    pub mod usecase;

    pub use provider::PrayerTimesProvider;
    pub use usecase::{PrayerTimesUseCase, PrayerTimesUseCaseImpl};
}

pub mod calendar {
    pub mod controller;
    pub mod usecase;

    pub use usecase::{CalendarUseCase, CalendarUseCaseImpl};
}

pub mod bookmarks {
    pub mod controller;
}
