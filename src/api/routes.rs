//! API route configuration.

use crate::api::handlers::{
    check_handler, delete_handler, health_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create or return a short code
/// - `GET  /r/{code}`           - Redirect to the original URL
/// - `GET  /check-url-or-alias` - Check whether a URL or alias is mapped
/// - `POST|DELETE /delete-url`  - Delete a mapping
/// - `GET  /health`             - Store and cache status
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/r/{code}", get(redirect_handler))
        .route("/check-url-or-alias", get(check_handler))
        .route(
            "/delete-url",
            post(delete_handler).delete(delete_handler),
        )
        .route("/health", get(health_handler))
}
