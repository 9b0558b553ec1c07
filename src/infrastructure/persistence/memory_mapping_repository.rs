//! In-process implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{DeleteFilter, MappingRepository, StoreError};

#[derive(Default)]
struct Tables {
    by_code: HashMap<String, UrlMapping>,
    code_by_url: HashMap<String, String>,
}

impl Tables {
    fn remove_code(&mut self, short_code: &str) -> u64 {
        match self.by_code.remove(short_code) {
            Some(mapping) => {
                self.code_by_url.remove(&mapping.original_url);
                1
            }
            None => 0,
        }
    }
}

/// Store that keeps mappings in memory for the lifetime of the process.
///
/// Both unique indexes live under a single write lock, so a racing duplicate
/// insert observes the winner and fails with [`StoreError::DuplicateKey`].
/// Nothing is durable across restarts; intended for development and tests.
#[derive(Default)]
pub struct MemoryMappingRepository {
    tables: RwLock<Tables>,
}

impl MemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.tables.read().await.by_code.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.tables.read().await.by_code.get(short_code).cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let tables = self.tables.read().await;

        Ok(tables
            .code_by_url
            .get(original_url)
            .and_then(|code| tables.by_code.get(code))
            .cloned())
    }

    async fn insert(&self, mapping: UrlMapping) -> Result<UrlMapping, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.by_code.contains_key(&mapping.short_code) {
            return Err(StoreError::DuplicateKey {
                field: "short_code".to_string(),
            });
        }
        if tables.code_by_url.contains_key(&mapping.original_url) {
            return Err(StoreError::DuplicateKey {
                field: "original_url".to_string(),
            });
        }

        tables
            .code_by_url
            .insert(mapping.original_url.clone(), mapping.short_code.clone());
        tables
            .by_code
            .insert(mapping.short_code.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn delete_one(&self, filter: &DeleteFilter) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;

        let code = match filter {
            DeleteFilter::ShortCode(code) => Some(code.clone()),
            DeleteFilter::OriginalUrl(url) => tables.code_by_url.get(url).cloned(),
        };

        Ok(code.map_or(0, |code| tables.remove_code(&code)))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;

        let expired: Vec<String> = tables
            .by_code
            .values()
            .filter(|m| m.is_expired_at(now))
            .map(|m| m.short_code.clone())
            .collect();

        Ok(expired.iter().map(|code| tables.remove_code(code)).sum())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn mapping(code: &str, url: &str) -> UrlMapping {
        UrlMapping::new(code.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryMappingRepository::new();
        repo.insert(mapping("abc", "http://a.com")).await.unwrap();

        let by_code = repo.find_by_short_code("abc").await.unwrap().unwrap();
        assert_eq!(by_code.original_url, "http://a.com");

        let by_url = repo
            .find_by_original_url("http://a.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_url.short_code, "abc");
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = MemoryMappingRepository::new();

        assert!(repo.find_by_short_code("nope").await.unwrap().is_none());
        assert!(
            repo.find_by_original_url("http://nope.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_short_code_rejected() {
        let repo = MemoryMappingRepository::new();
        repo.insert(mapping("abc", "http://a.com")).await.unwrap();

        let err = repo
            .insert(mapping("abc", "http://b.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::DuplicateKey { ref field } if field == "short_code"));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_original_url_rejected() {
        let repo = MemoryMappingRepository::new();
        repo.insert(mapping("abc", "http://a.com")).await.unwrap();

        let err = repo
            .insert(mapping("xyz", "http://a.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::DuplicateKey { ref field } if field == "original_url"));
        assert!(repo.find_by_short_code("xyz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_one_by_code_and_url() {
        let repo = MemoryMappingRepository::new();
        repo.insert(mapping("abc", "http://a.com")).await.unwrap();
        repo.insert(mapping("def", "http://d.com")).await.unwrap();

        let removed = repo
            .delete_one(&DeleteFilter::ShortCode("abc".to_string()))
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert!(
            repo.find_by_original_url("http://a.com")
                .await
                .unwrap()
                .is_none()
        );

        let removed = repo
            .delete_one(&DeleteFilter::OriginalUrl("http://d.com".to_string()))
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert!(repo.is_empty().await);

        let removed = repo
            .delete_one(&DeleteFilter::ShortCode("abc".to_string()))
            .await
            .unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn test_deleted_url_can_be_reused() {
        let repo = MemoryMappingRepository::new();
        repo.insert(mapping("abc", "http://a.com")).await.unwrap();
        repo.delete_one(&DeleteFilter::ShortCode("abc".to_string()))
            .await
            .unwrap();

        assert!(repo.insert(mapping("new", "http://a.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_expired_removes_only_expired() {
        let repo = MemoryMappingRepository::new();
        let now = Utc::now();

        repo.insert(UrlMapping::new(
            "old".to_string(),
            "http://old.com".to_string(),
            now - Duration::days(8),
        ))
        .await
        .unwrap();
        repo.insert(UrlMapping::new(
            "fresh".to_string(),
            "http://fresh.com".to_string(),
            now - Duration::days(1),
        ))
        .await
        .unwrap();
        repo.insert(UrlMapping {
            short_code: "forever".to_string(),
            original_url: "http://forever.com".to_string(),
            created_at: now - Duration::days(365),
            expiration_date: None,
        })
        .await
        .unwrap();

        let removed = repo.delete_expired(now).await.unwrap();

        assert_eq!(removed, 1);
        assert!(repo.find_by_short_code("old").await.unwrap().is_none());
        assert!(
            repo.find_by_original_url("http://old.com")
                .await
                .unwrap()
                .is_none()
        );
        assert!(repo.find_by_short_code("fresh").await.unwrap().is_some());
        assert!(repo.find_by_short_code("forever").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_expired_is_strict() {
        let repo = MemoryMappingRepository::new();
        let created = Utc::now();
        let m = UrlMapping::new("edge".to_string(), "http://edge.com".to_string(), created);
        let expiry = m.expiration_date.unwrap();
        repo.insert(m).await.unwrap();

        assert_eq!(repo.delete_expired(expiry).await.unwrap(), 0);
        assert_eq!(
            repo.delete_expired(expiry + Duration::milliseconds(1))
                .await
                .unwrap(),
            1
        );
    }
}
