//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Response store reachable
/// - **503 Service Unavailable**: Response store degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "memory store ready" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let cache_check = check_cache(&state).await;
    let healthy = cache_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { cache: cache_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the response store backend.
async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();

    if state.cache.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} store ready", backend)),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{} store unreachable", backend)),
        }
    }
}
