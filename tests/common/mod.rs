#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use shorturl::api::routes::public_routes;
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use shorturl::infrastructure::persistence::MemoryMappingRepository;
use shorturl::state::AppState;

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// State backed by the in-memory store and cache.
///
/// The store is returned as well so tests can seed or inspect it directly.
pub fn create_test_state() -> (AppState, Arc<MemoryMappingRepository>) {
    let repo = Arc::new(MemoryMappingRepository::new());
    let state = AppState::new(repo.clone(), Arc::new(MemoryCache::new()));

    (state, repo)
}

/// Same as [`create_test_state`] with the redirect cache disabled.
pub fn create_uncached_state() -> (AppState, Arc<MemoryMappingRepository>) {
    let repo = Arc::new(MemoryMappingRepository::new());
    let state = AppState::new(repo.clone(), Arc::new(NullCache::new()));

    (state, repo)
}

pub fn create_state_with(
    repo: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    AppState::new(repo, cache)
}

pub fn test_server(state: AppState) -> TestServer {
    let app: Router = public_routes().with_state(state);
    TestServer::new(app).unwrap()
}

/// Shortens `url` through the HTTP API and returns the short code.
pub async fn shorten(server: &TestServer, url: &str, alias: Option<&str>) -> String {
    let mut form = vec![("url", url)];
    if let Some(alias) = alias {
        form.push(("custom_alias", alias));
    }

    let response = server.post("/shorten").form(&form).await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string()
}
