//! Handler for the shorten endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten` with form fields `url` and optional `custom_alias`
///
/// # Response
///
/// ```json
/// { "shortCode": "3f9a0c1d", "originalURL": "http://example.com" }
/// ```
///
/// # Errors
///
/// - 400 if `url` is missing or malformed, or the alias is invalid
/// - 409 if the URL is already shortened under another code or the alias is taken
/// - 500 on storage or entropy failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Form(form) = form.map_err(|e| {
        AppError::bad_request("Invalid form data", json!({ "reason": e.body_text() }))
    })?;
    form.validate()?;

    let mapping = state
        .mapping_service
        .shorten(&form.url, form.custom_alias.as_deref())
        .await?;

    Ok(Json(mapping.into()))
}
