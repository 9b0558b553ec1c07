//! Application layer services implementing business logic.
//!
//! Services consume the store and cache traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Shorten, lookup and delete
//! - [`services::redirect_service::RedirectService`] - Cache-first short code resolution

pub mod services;
