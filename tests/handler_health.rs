mod common;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use shorturl::domain::entities::UrlMapping;
use shorturl::domain::repositories::{DeleteFilter, MappingRepository, StoreError};
use shorturl::infrastructure::cache::MemoryCache;
use std::sync::Arc;

/// Store whose every call fails, standing in for an unreachable database.
struct DownRepository;

#[async_trait]
impl MappingRepository for DownRepository {
    async fn find_by_short_code(&self, _: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn find_by_original_url(&self, _: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn insert(&self, _: UrlMapping) -> Result<UrlMapping, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn delete_one(&self, _: &DeleteFilter) -> Result<u64, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn delete_expired(&self, _: DateTime<Utc>) -> Result<u64, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_reports_store_failure() {
    let state = common::create_state_with(Arc::new(DownRepository), Arc::new(MemoryCache::new()));
    let server = common::test_server(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_maps_to_500() {
    let state = common::create_state_with(Arc::new(DownRepository), Arc::new(MemoryCache::new()));
    let server = common::test_server(state);

    let response = server.get("/r/anything").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.json::<Value>()["error"]["code"], "storage_error");
}
