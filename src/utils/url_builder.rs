//! Upstream request URL construction and validation.
//!
//! Query strings are built with `url`'s form encoder, so filter values containing
//! spaces or `&` cannot break out of their parameter.

use crate::domain::entities::FilterSet;
use url::Url;

/// Fixed number of characters requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Errors that can occur while building or validating request URLs.
#[derive(Debug, thiserror::Error)]
pub enum UrlBuildError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Parses `input` as an absolute HTTP(S) URL.
///
/// # Errors
///
/// Returns [`UrlBuildError::Empty`] for blank input,
/// [`UrlBuildError::InvalidFormat`] for relative or malformed URLs and
/// [`UrlBuildError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn parse_absolute_url(input: &str) -> Result<Url, UrlBuildError> {
    if input.trim().is_empty() {
        return Err(UrlBuildError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlBuildError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(UrlBuildError::UnsupportedProtocol),
    }
}

/// Builds the character list URL for one page.
///
/// Produces `<base>?page=<page>&pageSize=10` followed by one `&key=value` pair per
/// non-empty filter. Empty filter values contribute nothing.
///
/// # Examples
///
/// ```ignore
/// let filters = FilterSet { gender: "Female".into(), ..Default::default() };
/// assert_eq!(
///     character_page_url("https://x.test/api/characters", 1, &filters).unwrap(),
///     "https://x.test/api/characters?page=1&pageSize=10&gender=Female"
/// );
/// ```
pub fn character_page_url(
    base: &str,
    page: u32,
    filters: &FilterSet,
) -> Result<String, UrlBuildError> {
    let mut url = parse_absolute_url(base)?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &PAGE_SIZE.to_string());

        for (key, value) in filters.active() {
            query.append_pair(key, value);
        }
    }

    Ok(url.to_string())
}

/// Builds the age service URL for a first name.
pub fn age_lookup_url(base: &str, first_name: &str) -> Result<String, UrlBuildError> {
    let mut url = parse_absolute_url(base)?;
    url.query_pairs_mut().append_pair("name", first_name);
    Ok(url.to_string())
}
