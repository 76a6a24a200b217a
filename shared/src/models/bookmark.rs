use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-saved reference to one ayah.
///
/// Bookmarks carry enough of the entity to render the bookmarks list
/// without re-fetching, plus the creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkedAyah {
    #[serde(rename = "surahNumber")]
    pub surah_number: u16,
    #[serde(rename = "ayahNumber")]
    pub ayah_number: u32,
    #[serde(rename = "surahName")]
    pub surah_name: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

/// A user-saved dua.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkedPrayer {
    pub id: String,
    pub title: String,
    pub arabic: String,
    pub latin: String,
    pub translation: String,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

/// A user-saved news article reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkedArticle {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl BookmarkedAyah {
    /// Identity is (surah, ayah); timestamps and text do not participate.
    pub fn same_ayah(&self, surah_number: u16, ayah_number: u32) -> bool {
        self.surah_number == surah_number && self.ayah_number == ayah_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bookmark_serializes_camel_case() {
        let bookmark = BookmarkedAyah {
            surah_number: 2,
            ayah_number: 255,
            surah_name: "Al-Baqarah".to_string(),
            text: "...".to_string(),
            translation: None,
            added_at: Utc::now(),
        };
        let json = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(json["surahNumber"], 2);
        assert_eq!(json["ayahNumber"], 255);
        assert!(json.get("addedAt").is_some());
        assert!(json.get("translation").is_none());
    }

    #[test]
    fn test_same_ayah_ignores_timestamp() {
        let bookmark = BookmarkedAyah {
            surah_number: 1,
            ayah_number: 1,
            surah_name: "Al-Fatihah".to_string(),
            text: "...".to_string(),
            translation: None,
            added_at: Utc::now(),
        };
        assert!(bookmark.same_ayah(1, 1));
        assert!(!bookmark.same_ayah(1, 2));
    }
}
