use serde::{Deserialize, Serialize};
use validator::Validate;

/// A dua (supplication) in the normalized shape served to clients.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Prayer {
    /// Upstream record id
    #[validate(length(min = 1, message = "Prayer id is required"))]
    pub id: String,

    /// Title, e.g. "Doa Sebelum Makan"
    #[validate(length(min = 1, message = "Prayer title is required"))]
    pub title: String,

    /// Arabic text
    pub arabic: String,

    /// Latin transliteration
    pub latin: String,

    /// Translated meaning
    pub translation: String,
}

impl Prayer {
    /// Case-insensitive substring match against title and translation
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.translation.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Prayer {
        Prayer {
            id: "1".to_string(),
            title: "Doa Sebelum Makan".to_string(),
            arabic: "اَللّٰهُمَّ بَارِكْ لَنَا".to_string(),
            latin: "Alloohumma barik lanaa".to_string(),
            translation: "Ya Allah, berkahilah kami dalam rezeki".to_string(),
        }
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        assert!(sample().matches("MAKAN"));
        assert!(sample().matches("makan"));
    }

    #[test]
    fn test_matches_translation() {
        assert!(sample().matches("rezeki"));
    }

    #[test]
    fn test_does_not_match_arabic_or_latin_only_terms() {
        assert!(!sample().matches("barik"));
        assert_eq!(sample().matches("tidur"), false);
    }
}
