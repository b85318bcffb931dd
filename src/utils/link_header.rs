//! Total page count extraction from `Link` response headers.

use crate::domain::entities::UNKNOWN_PAGE_COUNT;
use regex::Regex;
use std::sync::LazyLock;

static PAGE_PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"page=(\d+)").expect("valid page regex"));

const LAST_RELATION: &str = r#"rel="last""#;

/// Parses the total page count from a `Link` header value.
///
/// The header is a comma-separated list of links. Exactly one of them must carry
/// `rel="last"`, and that link's `page=<digits>` query parameter is the page count.
///
/// Never fails: a missing, ambiguous or malformed header yields
/// [`UNKNOWN_PAGE_COUNT`] (`-1`).
///
/// # Examples
///
/// ```ignore
/// let header = r#"<https://x.test/api/characters?page=2&pageSize=10>; rel="next", <https://x.test/api/characters?page=214&pageSize=10>; rel="last""#;
/// assert_eq!(parse_total_pages(header), 214);
/// assert_eq!(parse_total_pages(""), -1);
/// ```
pub fn parse_total_pages(link_header: &str) -> i64 {
    let last_links: Vec<&str> = link_header
        .split(',')
        .filter(|link| link.contains(LAST_RELATION))
        .collect();

    let [last_link] = last_links.as_slice() else {
        return UNKNOWN_PAGE_COUNT;
    };

    PAGE_PARAM_REGEX
        .captures(last_link)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
        .unwrap_or(UNKNOWN_PAGE_COUNT)
}
