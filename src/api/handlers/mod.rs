//! HTTP request handlers for API endpoints.

pub mod characters;
pub mod health;

pub use characters::characters_handler;
pub use health::health_handler;
