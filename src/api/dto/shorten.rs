//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Form submitted to `POST /shorten`.
///
/// An empty `custom_alias` field is read as "no alias".
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    /// The long URL to shorten. A missing scheme is filled in by the service.
    #[serde(default)]
    #[validate(length(min = 1, max = 2048, message = "URL must be provided"))]
    pub url: String,

    /// Optional user-chosen short code.
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 64))]
    pub custom_alias: Option<String>,
}

/// Short code and target returned after shortening.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortCode")]
    pub short_code: String,
    #[serde(rename = "originalURL")]
    pub original_url: String,
}

impl From<UrlMapping> for ShortenResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            short_code: mapping.short_code,
            original_url: mapping.original_url,
        }
    }
}
