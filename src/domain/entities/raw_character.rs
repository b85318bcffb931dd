//! Boundary schemas for upstream JSON bodies.
//!
//! Upstream bodies arrive untyped; decoding them here turns shape mismatches into
//! [`ApiError::ElementParse`](crate::domain::ApiError::ElementParse) instead of
//! surprising downstream code.

use serde::Deserialize;
use serde_json::{Number, Value};
use serde_with::{DefaultOnNull, serde_as};

/// A character record as returned by the character list endpoint.
///
/// `name` is required. Every other field defaults to empty when absent or `null`,
/// but a present value of the wrong type is a decode failure.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCharacter {
    pub name: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub gender: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub culture: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub born: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub died: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub titles: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub aliases: Vec<String>,

    /// URL of the father entity, or empty.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub father: String,

    /// URL of the mother entity, or empty.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub mother: String,

    /// URL of the spouse entity, or empty.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub spouse: String,

    /// URLs of house entities.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub allegiances: Vec<String>,

    /// URLs of book entities.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub books: Vec<String>,

    /// URLs of book entities the character narrates.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub pov_books: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tv_series: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub played_by: Vec<String>,
}

impl RawCharacter {
    /// Decodes a raw JSON value into the character schema.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

/// Any referenced entity (character, house, book) that exposes a display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedEntity {
    pub name: String,
}

/// Response body of the age estimation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgeEstimate {
    #[serde(default)]
    pub age: Option<Number>,
}

impl AgeEstimate {
    /// Stringified age, or empty when the service had no estimate.
    pub fn age_string(&self) -> String {
        self.age.as_ref().map(Number::to_string).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let value = json!({
            "url": "https://anapioficeandfire.com/api/characters/583",
            "name": "Jon Snow",
            "gender": "Male",
            "culture": "Northmen",
            "born": "In 283 AC",
            "died": "",
            "titles": ["Lord Commander of the Night's Watch"],
            "aliases": ["Lord Snow", "Ned Stark's Bastard"],
            "father": "",
            "mother": "",
            "spouse": "",
            "allegiances": ["https://anapioficeandfire.com/api/houses/362"],
            "books": ["https://anapioficeandfire.com/api/books/5"],
            "povBooks": ["https://anapioficeandfire.com/api/books/1"],
            "tvSeries": ["Season 1", "Season 2"],
            "playedBy": ["Kit Harington"]
        });

        let raw = RawCharacter::from_value(&value).unwrap();
        assert_eq!(raw.name, "Jon Snow");
        assert_eq!(raw.culture, "Northmen");
        assert_eq!(raw.allegiances.len(), 1);
        assert_eq!(raw.pov_books, vec!["https://anapioficeandfire.com/api/books/1"]);
        assert_eq!(raw.played_by, vec!["Kit Harington"]);
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let raw = RawCharacter::from_value(&json!({
            "name": "Walder",
            "culture": null,
            "aliases": null
        }))
        .unwrap();

        assert_eq!(raw.culture, "");
        assert!(raw.aliases.is_empty());
        assert!(raw.books.is_empty());
        assert_eq!(raw.father, "");
    }

    #[test]
    fn test_missing_name_is_error() {
        assert!(RawCharacter::from_value(&json!({ "gender": "Female" })).is_err());
    }

    #[test]
    fn test_wrong_shape_is_error() {
        assert!(RawCharacter::from_value(&json!("Jon Snow")).is_err());
        assert!(RawCharacter::from_value(&json!({ "name": "Jon", "books": "x" })).is_err());
        assert!(RawCharacter::from_value(&json!({ "name": 42 })).is_err());
    }

    #[test]
    fn test_age_estimate_string() {
        let estimate: AgeEstimate = serde_json::from_value(json!({ "age": 57 })).unwrap();
        assert_eq!(estimate.age_string(), "57");

        let estimate: AgeEstimate = serde_json::from_value(json!({ "age": null })).unwrap();
        assert_eq!(estimate.age_string(), "");

        let estimate: AgeEstimate =
            serde_json::from_value(json!({ "count": 0, "name": "Hodor" })).unwrap();
        assert_eq!(estimate.age_string(), "");
    }
}
