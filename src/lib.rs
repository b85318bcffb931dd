//! # got-tables
//!
//! A paginated, filterable browser for the characters of An API of Ice And Fire.
//! Every character comes back fully resolved: parent, spouse, house and book
//! references are fetched and replaced by display names, and an age estimate is
//! attached from agify.io.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, boundary schemas, gateway traits, errors
//! - **Application Layer** ([`application`]) - The aggregation pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest gateway and response stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Pipeline
//!
//! ```text
//! PageService ─► RequestClient (memoized) ─► Link header ─► parse_total_pages
//!                                         └► body ─► CharacterAggregator
//!                                                     ├► ReferenceResolver
//!                                                     └► AgeEstimator
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the JSON API
//! cargo run
//!
//! # Browse from the terminal
//! cargo run --bin browse -- --page 2 --gender Female
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AgeEstimator, CharacterAggregator, PageService, ReferenceResolver, RequestClient,
    };
    pub use crate::domain::entities::{
        Character, CharacterPage, FilterSet, MemoizedResponse, UNKNOWN_PAGE_COUNT,
    };
    pub use crate::domain::gateways::HttpGateway;
    pub use crate::domain::{ApiError, ApiResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{InMemoryCache, ResponseCache};
    pub use crate::state::AppState;
    pub use crate::utils::link_header::parse_total_pages;
}
