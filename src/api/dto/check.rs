//! DTOs for the existence-check endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::UrlMapping;

/// Query string of `GET /check-url-or-alias`. Empty values count as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CheckQuery {
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub url: Option<String>,

    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub custom_alias: Option<String>,
}

/// Full view of a stored mapping.
#[derive(Debug, Serialize)]
pub struct MappingView {
    #[serde(rename = "shortCode")]
    pub short_code: String,
    #[serde(rename = "originalURL")]
    pub original_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "expirationDate", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl From<UrlMapping> for MappingView {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            short_code: mapping.short_code,
            original_url: mapping.original_url,
            created_at: mapping.created_at,
            expiration_date: mapping.expiration_date,
        }
    }
}

/// Result of an existence check.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<MappingView>,
}

impl CheckResponse {
    pub fn found(mapping: UrlMapping) -> Self {
        Self {
            exists: true,
            mapping: Some(mapping.into()),
        }
    }

    pub fn missing() -> Self {
        Self {
            exists: false,
            mapping: None,
        }
    }
}
