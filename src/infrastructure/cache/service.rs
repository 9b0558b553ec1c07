//! Cache service trait.

use async_trait::async_trait;

/// Short code → original URL cache sitting in front of the store.
///
/// Each individual `get_url` / `set_url` is atomic, but there is no
/// consistency with the store across calls: a cached URL whose mapping has
/// since expired or been deleted keeps being served until it is overwritten
/// or the process restarts.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - process-local map
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached URL for a short code, or `None` on a miss.
    async fn get_url(&self, short_code: &str) -> Option<String>;

    /// Stores a URL for a short code, overwriting any previous value.
    async fn set_url(&self, short_code: &str, original_url: &str);

    /// Number of cached entries.
    async fn entry_count(&self) -> usize;

    /// Human-readable backend name for health reporting.
    fn backend(&self) -> &'static str;
}
