//! Redirect read path: cache first, then the store.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves short codes to their target URLs.
///
/// On a cache miss the mapping is read from the store and written through to
/// the cache. Expiration is not checked on this path: a mapping resolves until
/// the janitor removes it, and a cached entry keeps resolving even after that.
pub struct RedirectService {
    mapping_service: Arc<MappingService>,
    cache: Arc<dyn CacheService>,
}

impl RedirectService {
    pub fn new(mapping_service: Arc<MappingService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            mapping_service,
            cache,
        }
    }

    /// Returns the original URL for `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is neither cached nor stored.
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if let Some(url) = self.cache.get_url(short_code).await {
            metrics::counter!("shorturl_cache_hits_total").increment(1);
            return Ok(url);
        }
        metrics::counter!("shorturl_cache_misses_total").increment(1);

        let mapping = self.mapping_service.lookup(Some(short_code), None).await?;

        self.cache
            .set_url(short_code, &mapping.original_url)
            .await;

        Ok(mapping.original_url)
    }
}
