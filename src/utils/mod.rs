//! Utility functions shared across layers.
//!
//! - [`link_header`] - Total page count extraction from `Link` headers
//! - [`url_builder`] - Upstream request URL construction

pub mod link_header;
pub mod url_builder;
