//! Process-local cache backed by a concurrent hash map.

use super::service::CacheService;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// In-memory short code → URL cache.
///
/// No eviction, no TTL and no size bound: entries live until overwritten or
/// the process exits. Every operation locks a single shard briefly and never
/// across a store call.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: DashMap<String, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_code: &str) -> Option<String> {
        let url = self.inner.get(short_code).map(|v| v.value().clone());

        match &url {
            Some(url) => debug!("Cache HIT: {} -> {}", short_code, url),
            None => debug!("Cache MISS: {}", short_code),
        }

        url
    }

    async fn set_url(&self, short_code: &str, original_url: &str) {
        self.inner
            .insert(short_code.to_string(), original_url.to_string());
        debug!("Cache SET: {} -> {}", short_code, original_url);
    }

    async fn entry_count(&self) -> usize {
        self.inner.len()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_missing() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get_url("nope").await, None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache.set_url("abc", "http://a.com").await;

        assert_eq!(cache.get_url("abc").await.as_deref(), Some("http://a.com"));
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryCache::new();
        cache.set_url("abc", "http://a.com").await;
        cache.set_url("abc", "http://b.com").await;

        assert_eq!(cache.get_url("abc").await.as_deref(), Some("http://b.com"));
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers() {
        let cache = Arc::new(MemoryCache::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    let code = format!("code{i}");
                    cache.set_url(&code, &format!("http://{i}.com")).await;
                    cache.get_url(&code).await
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let url = handle.await.unwrap();
            assert_eq!(url, Some(format!("http://{i}.com")));
        }
        assert_eq!(cache.entry_count().await, 64);
    }
}
