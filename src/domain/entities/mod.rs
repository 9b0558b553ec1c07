//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`]. It is a plain data
//! structure; the rules for creating and removing it live in
//! [`crate::application::services`] and [`crate::domain::janitor`].

pub mod mapping;

pub use mapping::{RETENTION_DAYS, UrlMapping, retention};
