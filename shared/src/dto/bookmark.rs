use crate::models::bookmark::{BookmarkedArticle, BookmarkedAyah, BookmarkedPrayer};
use serde::{Deserialize, Serialize};

/// The bookmark collections returned by `/api/bookmarks`.
///
/// Bookmarks live in client-local storage; the server-side endpoint is a
/// placeholder and always serves empty collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookmarkCollections {
    pub ayahs: Vec<BookmarkedAyah>,
    pub prayers: Vec<BookmarkedPrayer>,
    pub articles: Vec<BookmarkedArticle>,
}

impl BookmarkCollections {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections_serialize_as_empty_arrays() {
        let json = serde_json::to_value(BookmarkCollections::empty()).unwrap();
        assert_eq!(json["ayahs"].as_array().unwrap().len(), 0);
        assert_eq!(json["prayers"].as_array().unwrap().len(), 0);
        assert_eq!(json["articles"].as_array().unwrap().len(), 0);
    }
}
