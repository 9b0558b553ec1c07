//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization/deserialization; form input is
//! checked with `validator`.

pub mod check;
pub mod delete;
pub mod health;
pub mod shorten;
