//! Top-level router combining API routes and the landing page.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page (`STATIC_DIR/index.html`)
//! - `/static/*`      - Static assets
//! - everything else  - see [`crate::api::routes::public_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use std::path::Path;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding `index.html` and other static assets
/// - `request_timeout` - deadline applied to every request
pub fn app_router(
    state: AppState,
    static_dir: impl AsRef<Path>,
    request_timeout: Duration,
) -> NormalizePath<Router> {
    let static_dir = static_dir.as_ref();

    let router = Router::new()
        .merge(api::routes::public_routes())
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
