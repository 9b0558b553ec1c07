//! Helpers shared by the application services.
//!
//! - [`code_generator`] - Random short codes and custom alias validation
//! - [`url_normalizer`] - Scheme defaulting and URL sanity checks

pub mod code_generator;
pub mod url_normalizer;
