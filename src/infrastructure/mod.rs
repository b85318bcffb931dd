//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete network access and response storage.
//!
//! # Modules
//!
//! - [`cache`] - Response stores (in-memory and Redis)
//! - [`http`] - reqwest-backed network gateway

pub mod cache;
pub mod http;
