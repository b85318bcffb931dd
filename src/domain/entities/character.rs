//! Resolved character entity and page container.

use serde::{Deserialize, Serialize};

/// Sentinel page count meaning "unknown or unparseable".
///
/// Never a real count: consumers must not read it as zero or one page.
pub const UNKNOWN_PAGE_COUNT: i64 = -1;

/// A character with every reference field resolved to a display name.
///
/// `father`, `mother`, `spouse`, `allegiances`, `books` and `pov_books` never hold
/// raw URLs, only names or empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub gender: String,
    pub culture: String,
    pub born: String,
    pub died: String,
    pub titles: Vec<String>,
    pub aliases: Vec<String>,
    pub father: String,
    pub mother: String,
    pub spouse: String,
    pub allegiances: Vec<String>,
    pub books: Vec<String>,
    pub pov_books: Vec<String>,
    pub tv_series: Vec<String>,
    pub played_by: Vec<String>,
    pub age: String,
}

/// One page of resolved characters plus the total page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPage {
    pub characters: Vec<Character>,
    /// Total number of pages, or [`UNKNOWN_PAGE_COUNT`].
    pub total_pages: i64,
}

impl CharacterPage {
    pub fn new(characters: Vec<Character>, total_pages: i64) -> Self {
        Self {
            characters,
            total_pages,
        }
    }

    /// Returns true when the upstream reported a usable page count.
    pub fn is_page_count_known(&self) -> bool {
        self.total_pages != UNKNOWN_PAGE_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_serializes_camel_case() {
        let character = Character {
            name: "Arya Stark".to_string(),
            pov_books: vec!["A Game of Thrones".to_string()],
            tv_series: vec!["Season 1".to_string()],
            played_by: vec!["Maisie Williams".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["povBooks"][0], "A Game of Thrones");
        assert_eq!(json["tvSeries"][0], "Season 1");
        assert_eq!(json["playedBy"][0], "Maisie Williams");
        assert!(json.get("pov_books").is_none());
    }

    #[test]
    fn test_page_count_sentinel() {
        assert!(!CharacterPage::new(vec![], UNKNOWN_PAGE_COUNT).is_page_count_known());
        assert!(CharacterPage::new(vec![], 1).is_page_count_known());

        let json = serde_json::to_value(CharacterPage::new(vec![], -1)).unwrap();
        assert_eq!(json["totalPages"], -1);
    }
}
