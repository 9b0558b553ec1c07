//! Handler for the existence-check endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::check::{CheckQuery, CheckResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether a URL, an alias, or both (matched together) are mapped.
///
/// # Endpoint
///
/// `GET /check-url-or-alias?url=...&custom_alias=...`
///
/// The URL is matched exactly as given.
///
/// # Response
///
/// ```json
/// { "exists": true, "mapping": { "shortCode": "promo", "originalURL": "http://example.com", ... } }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if neither parameter is given.
pub async fn check_handler(
    State(state): State<AppState>,
    query: Result<Query<CheckQuery>, QueryRejection>,
) -> Result<Json<CheckResponse>, AppError> {
    let Query(query) = query.map_err(|e| {
        AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
    })?;

    match state
        .mapping_service
        .lookup(query.custom_alias.as_deref(), query.url.as_deref())
        .await
    {
        Ok(mapping) => Ok(Json(CheckResponse::found(mapping))),
        Err(AppError::NotFound { .. }) => Ok(Json(CheckResponse::missing())),
        Err(e) => Err(e),
    }
}
