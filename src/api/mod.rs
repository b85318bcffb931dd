//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into page requests and formats responses
//! for table-style consumers.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
