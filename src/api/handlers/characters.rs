//! Handler for paginated character listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::characters::{CharacterPageResponse, CharacterQueryParams};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one page of fully resolved characters.
///
/// # Endpoint
///
/// `GET /api/characters`
///
/// # Query Parameters
///
/// - `page` (optional): Page number, 1-indexed (default: 1)
/// - `name`, `gender`, `culture`, `born`, `died` (optional): Filters; empty values
///   are ignored
///
/// # Response
///
/// ```json
/// {
///   "page": 1,
///   "totalPages": 214,
///   "hasPrevious": false,
///   "hasNext": true,
///   "characters": [{ "name": "Jon Snow", "father": "", "age": "57", "...": "..." }]
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the query string does not parse or the page number is invalid
/// - 502 Bad Gateway if an upstream request fails or the page body is malformed
pub async fn characters_handler(
    State(state): State<AppState>,
    query: Result<Query<CharacterQueryParams>, QueryRejection>,
) -> Result<Json<CharacterPageResponse>, AppError> {
    let Query(params) = query.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let page = params
        .validated_page()
        .map_err(|e| AppError::bad_request(e, json!({ "page": params.page })))?;

    let result = state
        .page_service
        .request_page(page, &params.filters)
        .await?;

    Ok(Json(CharacterPageResponse::from_page(page, result)))
}
