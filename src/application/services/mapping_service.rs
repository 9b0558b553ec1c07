//! Mapping lifecycle service: shorten, lookup and delete.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{DeleteFilter, MappingRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_alias};
use crate::utils::url_normalizer::{ensure_scheme, normalize_url};

/// Treats an empty identifier the same as an absent one.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Service owning the business rules of the mapping lifecycle.
///
/// Duplicate checks before insert only give friendlier errors; the store's
/// unique constraints remain the backstop, and a late
/// [`StoreError::DuplicateKey`] is reported exactly like a pre-check conflict.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    code_length: usize,
}

impl MappingService {
    /// Creates a new mapping service generating codes of [`DEFAULT_CODE_LENGTH`].
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self {
            repository,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Shortens `long_url`, optionally under a custom alias.
    ///
    /// # Behavior
    ///
    /// - The URL is normalized (`http://` prepended when no scheme is given)
    /// - If the normalized URL is already mapped, the existing mapping is
    ///   returned, unless a different alias was requested
    /// - A requested alias must be free; otherwise an 8-character hex code is generated
    /// - New mappings expire after the fixed retention window
    ///
    /// Generated codes are not retried on collision: a clash surfaces as a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or alias is malformed.
    /// Returns [`AppError::Conflict`] if the URL is mapped to another code, the
    /// alias is taken, or a concurrent insert won the race.
    /// Returns [`AppError::Entropy`] if no random code can be generated.
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<UrlMapping, AppError> {
        let alias = non_empty(custom_alias);

        let original_url = normalize_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(alias) = alias {
            validate_alias(alias)?;
        }

        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return match alias {
                Some(alias) if alias != existing.short_code => Err(AppError::conflict(
                    "A short URL for this link already exists",
                    json!({
                        "original_url": existing.original_url,
                        "short_code": existing.short_code,
                        "requested_alias": alias,
                    }),
                )),
                _ => Ok(existing),
            };
        }

        let short_code = match alias {
            Some(alias) => {
                if self.repository.find_by_short_code(alias).await?.is_some() {
                    return Err(AppError::conflict(
                        "Custom alias already in use",
                        json!({ "alias": alias }),
                    ));
                }
                alias.to_string()
            }
            None => generate_code(self.code_length)?,
        };

        let mapping = UrlMapping::new(short_code, original_url, Utc::now());

        match self.repository.insert(mapping).await {
            Ok(created) => {
                metrics::counter!("shorturl_mappings_created_total").increment(1);
                info!(
                    short_code = %created.short_code,
                    original_url = %created.original_url,
                    "Mapping created"
                );
                Ok(created)
            }
            Err(StoreError::DuplicateKey { field }) => Err(AppError::conflict(
                "Short code or URL was taken by a concurrent request",
                json!({ "field": field }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Finds a mapping by short code, original URL, or both (combined as AND).
    ///
    /// The URL is matched exactly as given; no normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if neither identifier is supplied.
    /// Returns [`AppError::NotFound`] if nothing matches.
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn lookup(
        &self,
        short_code: Option<&str>,
        original_url: Option<&str>,
    ) -> Result<UrlMapping, AppError> {
        let short_code = non_empty(short_code);
        let original_url = non_empty(original_url);

        let found = match (short_code, original_url) {
            (None, None) => {
                return Err(AppError::bad_request(
                    "URL or custom alias must be provided",
                    json!({}),
                ));
            }
            (Some(code), url) => self
                .repository
                .find_by_short_code(code)
                .await?
                .filter(|m| url.is_none_or(|u| m.original_url == u)),
            (None, Some(url)) => self.repository.find_by_original_url(url).await?,
        };

        found.ok_or_else(|| {
            AppError::not_found(
                "Short link not found",
                json!({ "short_code": short_code, "original_url": original_url }),
            )
        })
    }

    /// Deletes a mapping by original URL or short code.
    ///
    /// The URL is normalized the same way as in [`Self::shorten`]. When both
    /// identifiers are given, the URL selects the mapping. Cached redirects for
    /// the deleted code are not invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if neither identifier is supplied.
    /// Returns [`AppError::NotFound`] if nothing matches, including when a
    /// concurrent delete removed the mapping first.
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn delete(
        &self,
        short_code: Option<&str>,
        original_url: Option<&str>,
    ) -> Result<UrlMapping, AppError> {
        let filter = match (non_empty(short_code), non_empty(original_url)) {
            (_, Some(url)) => DeleteFilter::OriginalUrl(ensure_scheme(url)),
            (Some(code), None) => DeleteFilter::ShortCode(code.to_string()),
            (None, None) => {
                return Err(AppError::bad_request(
                    "Either URL or short code must be provided",
                    json!({}),
                ));
            }
        };

        let not_found = || {
            AppError::not_found(
                "No matching URL or short code found",
                json!({ "field": filter.field(), "value": filter.value() }),
            )
        };

        let existing = match &filter {
            DeleteFilter::ShortCode(code) => self.repository.find_by_short_code(code).await?,
            DeleteFilter::OriginalUrl(url) => self.repository.find_by_original_url(url).await?,
        }
        .ok_or_else(not_found)?;

        if self.repository.delete_one(&filter).await? == 0 {
            return Err(not_found());
        }

        info!(
            short_code = %existing.short_code,
            original_url = %existing.original_url,
            "Mapping deleted"
        );

        Ok(existing)
    }

    /// Checks that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await.map_err(AppError::from)
    }
}
