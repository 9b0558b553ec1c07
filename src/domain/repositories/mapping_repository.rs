//! Store contract for URL mappings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::UrlMapping;

/// Errors returned by a [`MappingRepository`].
///
/// The duplicate-key case is engine independent: every implementation reports
/// a uniqueness violation on either unique field as [`StoreError::DuplicateKey`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate value for unique field `{field}`")]
    DuplicateKey { field: String },

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Selects exactly one mapping to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFilter {
    ShortCode(String),
    OriginalUrl(String),
}

impl DeleteFilter {
    /// Name of the field the filter matches on, as stored.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ShortCode(_) => "short_code",
            Self::OriginalUrl(_) => "original_url",
        }
    }

    /// The value being matched.
    pub fn value(&self) -> &str {
        match self {
            Self::ShortCode(v) | Self::OriginalUrl(v) => v,
        }
    }
}

/// Persistent store of URL mappings, keyed uniquely by short code and by
/// original URL.
///
/// Uniqueness is enforced by the store itself: a concurrent duplicate insert
/// must fail with [`StoreError::DuplicateKey`] even if the caller checked
/// beforehand.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Point lookup by short code. Absence is `Ok(None)`.
    async fn find_by_short_code(&self, short_code: &str)
    -> Result<Option<UrlMapping>, StoreError>;

    /// Point lookup by original URL. Absence is `Ok(None)`.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if either the short code or the
    /// original URL is already present.
    async fn insert(&self, mapping: UrlMapping) -> Result<UrlMapping, StoreError>;

    /// Deletes the mapping matching `filter`, returning how many were removed (0 or 1).
    async fn delete_one(&self, filter: &DeleteFilter) -> Result<u64, StoreError>;

    /// Deletes every mapping whose expiration date is strictly before `now`.
    ///
    /// Mappings without an expiration date are kept.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
