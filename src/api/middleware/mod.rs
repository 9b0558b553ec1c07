//! Request processing middleware.

pub mod timeout;
pub mod tracing;
