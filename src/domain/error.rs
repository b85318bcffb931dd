//! Error taxonomy for the character aggregation pipeline.

use serde_json::Value;

/// Errors produced while fetching and aggregating character data.
///
/// Only [`ApiError::ElementParse`] is recovered inside the pipeline (the offending
/// element is dropped from its page). Every other variant propagates to the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The URL handed to the request client is empty or not absolute.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure or an undecodable response body.
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The page body is not array-shaped at the top level.
    #[error("Malformed response: expected array but found: {value}")]
    MalformedResponse { value: Value },

    /// A single raw entity (or an entity it references) does not match the expected schema.
    #[error("Couldn't parse character object {value}: {reason}")]
    ElementParse { value: Value, reason: String },
}

impl ApiError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn element_parse(value: Value, reason: impl ToString) -> Self {
        Self::ElementParse {
            value,
            reason: reason.to_string(),
        }
    }

    /// Returns true for failures that only invalidate a single page element.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ElementParse { .. })
    }
}

/// Result type for pipeline operations.
pub type ApiResult<T> = Result<T, ApiError>;
