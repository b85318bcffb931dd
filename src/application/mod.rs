//! Application layer services implementing the aggregation pipeline.
//!
//! Services consume the [`crate::domain::gateways::HttpGateway`] and
//! [`crate::infrastructure::cache::ResponseCache`] abstractions and expose a clean API
//! to the HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::request_client::RequestClient`] - Memoizing fetch-once client
//! - [`services::age_service::AgeEstimator`] - First-name age estimates
//! - [`services::reference_resolver::ReferenceResolver`] - Reference URL to name resolution
//! - [`services::character_service::CharacterAggregator`] - Raw record aggregation
//! - [`services::page_service::PageService`] - Page request orchestration
//!
//! # Pipeline
//!
//! 1. [`services::page_service::PageService::request_page`] builds the list URL and
//!    fetches it through the request client
//! 2. The `Link` header goes to [`crate::utils::link_header::parse_total_pages`]
//! 3. The body goes to [`services::character_service::CharacterAggregator::to_characters`],
//!    which fans out to the resolver and the age estimator per character

pub mod services;
