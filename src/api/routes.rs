//! API route configuration.

use crate::api::handlers::characters_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /characters` - One page of resolved characters (paginated, filterable)
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/characters", get(characters_handler))
}
