use crate::storage::{StateStore, StorageError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::location::{LocationStrategy, ResolvedLocation};
use shared::{BookmarkedArticle, BookmarkedAyah, BookmarkedPrayer, Prayer};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Theme {
    #[serde(rename = "isDark")]
    pub is_dark: bool,
}

fn default_notifications() -> bool {
    true
}

/// The whole client-side application state.
///
/// Everything here is mutated only by discrete user actions and
/// persisted through a [`StateStore`] after each mutation. The only
/// location that survives a restart is the user's last manual entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    #[serde(rename = "bookmarkedAyahs")]
    pub bookmarked_ayahs: Vec<BookmarkedAyah>,
    #[serde(rename = "bookmarkedPrayers")]
    pub bookmarked_prayers: Vec<BookmarkedPrayer>,
    #[serde(rename = "bookmarkedArticles")]
    pub bookmarked_articles: Vec<BookmarkedArticle>,
    #[serde(rename = "currentLocation")]
    pub current_location: Option<ResolvedLocation>,
    #[serde(rename = "prayerNotifications", default = "default_notifications")]
    pub prayer_notifications: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            bookmarked_ayahs: Vec::new(),
            bookmarked_prayers: Vec::new(),
            bookmarked_articles: Vec::new(),
            current_location: None,
            prayer_notifications: true,
        }
    }
}

/// App state plus its persistence boundary; every mutating method
/// persists before returning.
pub struct AppStore<S: StateStore> {
    state: AppState,
    store: S,
}

impl<S: StateStore> AppStore<S> {
    /// Loads persisted state, falling back to defaults for a fresh
    /// profile.
    pub fn load_or_default(store: S) -> Result<Self, StorageError> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self { state, store })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn toggle_theme(&mut self) -> Result<(), StorageError> {
        self.state.theme.is_dark = !self.state.theme.is_dark;
        self.store.save(&self.state)
    }

    pub fn toggle_prayer_notifications(&mut self) -> Result<(), StorageError> {
        self.state.prayer_notifications = !self.state.prayer_notifications;
        self.store.save(&self.state)
    }

    /// Records a manual location entry (the only location persisted
    /// across restarts).
    pub fn set_location(
        &mut self,
        city: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), StorageError> {
        self.state.current_location = Some(ResolvedLocation {
            latitude,
            longitude,
            city: Some(city.to_string()),
            country: None,
            accuracy: None,
            strategy: LocationStrategy::Manual,
        });
        self.store.save(&self.state)
    }

    pub fn add_bookmarked_ayah(
        &mut self,
        surah_number: u16,
        ayah_number: u32,
        surah_name: &str,
        text: &str,
        translation: Option<&str>,
    ) -> Result<(), StorageError> {
        if self
            .state
            .bookmarked_ayahs
            .iter()
            .any(|b| b.same_ayah(surah_number, ayah_number))
        {
            return Ok(());
        }

        self.state.bookmarked_ayahs.push(BookmarkedAyah {
            surah_number,
            ayah_number,
            surah_name: surah_name.to_string(),
            text: text.to_string(),
            translation: translation.map(String::from),
            added_at: Utc::now(),
        });
        self.store.save(&self.state)
    }

    pub fn remove_bookmarked_ayah(
        &mut self,
        surah_number: u16,
        ayah_number: u32,
    ) -> Result<(), StorageError> {
        self.state
            .bookmarked_ayahs
            .retain(|b| !b.same_ayah(surah_number, ayah_number));
        self.store.save(&self.state)
    }

    pub fn add_bookmarked_prayer(&mut self, prayer: &Prayer) -> Result<(), StorageError> {
        if self.state.bookmarked_prayers.iter().any(|b| b.id == prayer.id) {
            return Ok(());
        }

        self.state.bookmarked_prayers.push(BookmarkedPrayer {
            id: prayer.id.clone(),
            title: prayer.title.clone(),
            arabic: prayer.arabic.clone(),
            latin: prayer.latin.clone(),
            translation: prayer.translation.clone(),
            added_at: Utc::now(),
        });
        self.store.save(&self.state)
    }

    pub fn remove_bookmarked_prayer(&mut self, id: &str) -> Result<(), StorageError> {
        self.state.bookmarked_prayers.retain(|b| b.id != id);
        self.store.save(&self.state)
    }

    pub fn add_bookmarked_article(
        &mut self,
        article: BookmarkedArticle,
    ) -> Result<(), StorageError> {
        if self
            .state
            .bookmarked_articles
            .iter()
            .any(|b| b.id == article.id)
        {
            return Ok(());
        }

        self.state.bookmarked_articles.push(article);
        self.store.save(&self.state)
    }

    pub fn remove_bookmarked_article(&mut self, id: &str) -> Result<(), StorageError> {
        self.state.bookmarked_articles.retain(|b| b.id != id);
        self.store.save(&self.state)
    }
}
