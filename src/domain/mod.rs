//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - The URL mapping entity
//! - [`repositories`] - Store trait definitions
//! - [`janitor`] - Background purge of expired mappings
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business rules for creating and deleting mappings live in
//!   [`crate::application::services`]

pub mod entities;
pub mod janitor;
pub mod repositories;
