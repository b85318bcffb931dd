//! Cached response unit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A decoded response body paired with its pagination `Link` header.
///
/// Stored once per request URL and returned verbatim on every later lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoizedResponse {
    pub body: Value,
    pub link_header: Option<String>,
}

impl MemoizedResponse {
    pub fn new(body: Value, link_header: Option<String>) -> Self {
        Self { body, link_header }
    }

    /// Returns the `Link` header, or an empty string when the response had none.
    pub fn link_header_or_empty(&self) -> &str {
        self.link_header.as_deref().unwrap_or("")
    }
}
