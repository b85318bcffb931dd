//! Domain layer containing the data model and outbound contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Characters, pages, filters and boundary schemas
//! - [`gateways`] - Network access trait definitions
//! - [`error`] - Pipeline error taxonomy
//!
//! The domain layer has no dependency on infrastructure or presentation layers.
//! Aggregation logic lives in [`crate::application::services`].

pub mod entities;
pub mod error;
pub mod gateways;

pub use error::{ApiError, ApiResult};
