//! Handler for the delete endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;

use crate::api::dto::delete::{DeleteRequest, DeleteResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a mapping by original URL or short code.
///
/// # Endpoint
///
/// `POST /delete-url`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com" }
/// ```
/// or
/// ```json
/// { "shortCode": "promo" }
/// ```
///
/// The URL is normalized like on shorten and wins when both fields are set.
/// A cached redirect for the deleted code is not invalidated.
///
/// # Errors
///
/// - 400 if the body is not valid JSON or neither field is given
/// - 404 if no mapping matches
pub async fn delete_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::bad_request("Invalid JSON data", json!({ "reason": e.body_text() }))
    })?;

    let deleted = state
        .mapping_service
        .delete(payload.short_code.as_deref(), payload.url.as_deref())
        .await?;

    Ok(Json(deleted.into()))
}
