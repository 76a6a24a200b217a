pub mod models {
    pub mod bookmark;
    pub mod location;
    pub mod prayer;
    pub mod prayer_times;
    pub mod surah;
}

pub mod dto {
    pub mod bookmark;
    pub mod common;
    pub mod prayer_times;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    bookmark::{BookmarkedArticle, BookmarkedAyah, BookmarkedPrayer},
    location::{LocationStrategy, ResolvedLocation},
    prayer::Prayer,
    prayer_times::{PrayerTimesSnapshot, PrayerTimings},
    surah::{Ayah, Surah, SurahDetail, SURAH_COUNT},
};

// Re-export DTOs
pub use dto::{
    bookmark::BookmarkCollections,
    common::{ErrorResponse, SearchQuery},
    prayer_times::{
        CalendarQuery, CityTimingsQuery, CoordinatesTimingsQuery, LocationSelector,
        DEFAULT_QUERY_COUNTRY,
    },
};
