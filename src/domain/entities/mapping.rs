//! URL mapping entity: the association between a short code and a long URL.

use chrono::{DateTime, Duration, Utc};

/// How long a mapping stays alive after creation.
pub const RETENTION_DAYS: i64 = 7;

/// Returns the fixed retention window applied to every new mapping.
pub fn retention() -> Duration {
    Duration::days(RETENTION_DAYS)
}

/// A persisted short code → original URL mapping.
///
/// Mappings are immutable once created. Both `short_code` and `original_url`
/// are unique across the store.
///
/// `expiration_date` is optional only because stored records may omit it;
/// every mapping built through [`UrlMapping::new`] carries one. A mapping
/// without an expiration date is never purged by the janitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl UrlMapping {
    /// Creates a mapping stamped at `created_at` that expires after [`retention`].
    pub fn new(short_code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code,
            original_url,
            created_at,
            expiration_date: Some(created_at + retention()),
        }
    }

    /// Returns true if the mapping's expiration date is strictly before `now`.
    ///
    /// This is the same predicate the janitor uses to purge mappings.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|e| e < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mapping_expires_after_retention() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            "abcd1234".to_string(),
            "http://example.com".to_string(),
            now,
        );

        assert_eq!(mapping.created_at, now);
        assert_eq!(mapping.expiration_date, Some(now + Duration::days(7)));
        assert!(mapping.expiration_date.unwrap() > mapping.created_at);
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let now = Utc::now();
        let mapping = UrlMapping::new("code".to_string(), "http://a.com".to_string(), now);
        let expiry = mapping.expiration_date.unwrap();

        assert!(!mapping.is_expired_at(now));
        assert!(!mapping.is_expired_at(expiry));
        assert!(mapping.is_expired_at(expiry + Duration::seconds(1)));
    }

    #[test]
    fn test_mapping_without_expiration_never_expires() {
        let mapping = UrlMapping {
            short_code: "legacy".to_string(),
            original_url: "http://legacy.com".to_string(),
            created_at: Utc::now(),
            expiration_date: None,
        };

        assert!(!mapping.is_expired_at(Utc::now() + Duration::days(3650)));
    }
}
