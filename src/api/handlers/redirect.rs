//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Check the cache for the code
/// 2. On a miss, read the store and write the URL through to the cache
/// 3. Return 302 Found with the original URL in `Location`
///
/// Expired mappings keep redirecting until the janitor removes them, and
/// cached entries keep redirecting after that.
///
/// # Errors
///
/// Returns 404 Not Found if the short code is unknown.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state
        .redirect_service
        .resolve(&code)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound { .. }) {
                info!(short_code = %code, "Short code not found");
            }
        })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
