//! DTOs for the character list endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{Character, CharacterPage, FilterSet};

/// Query parameters for `GET /api/characters`.
///
/// Uses `serde_with` to parse the page number from the query string. Filter keys
/// are flattened so `?gender=Female&culture=` maps straight onto a [`FilterSet`].
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CharacterQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(flatten)]
    pub filters: FilterSet,
}

impl CharacterQueryParams {
    /// Validates the page number, defaulting to 1.
    pub fn validated_page(&self) -> Result<u32, String> {
        match self.page.unwrap_or(1) {
            0 => Err("Page must be greater than 0".to_string()),
            page => Ok(page),
        }
    }
}

/// Response body for one page of characters.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPageResponse {
    pub page: u32,
    /// Total page count, or `-1` when unknown.
    pub total_pages: i64,
    pub has_previous: bool,
    /// True only when the total is known and lies beyond the current page.
    pub has_next: bool,
    pub characters: Vec<Character>,
}

impl CharacterPageResponse {
    pub fn from_page(page: u32, result: CharacterPage) -> Self {
        let has_next = result.is_page_count_known() && i64::from(page) < result.total_pages;

        Self {
            page,
            total_pages: result.total_pages,
            has_previous: page > 1,
            has_next,
            characters: result.characters,
        }
    }
}
