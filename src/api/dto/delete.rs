//! DTOs for the delete endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// JSON body of `POST /delete-url`. At least one field must be non-empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_code: Option<String>,
}

/// Confirmation returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    #[serde(rename = "shortCode")]
    pub short_code: String,
    #[serde(rename = "originalURL")]
    pub original_url: String,
}

impl From<UrlMapping> for DeleteResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            message: "URL deleted successfully.",
            short_code: mapping.short_code,
            original_url: mapping.original_url,
        }
    }
}
