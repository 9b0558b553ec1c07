//! Per-request deadline.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Builds a layer that aborts a request once `deadline` has elapsed.
///
/// The handler future, including any in-flight store call, is dropped and the
/// client receives `408 Request Timeout`. A client disconnect drops the
/// future in the same way.
pub fn layer(deadline: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, deadline)
}
