use std::sync::Arc;

use crate::application::services::{MappingService, RedirectService};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::CacheService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub redirect_service: Arc<RedirectService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the services on top of a store and a cache.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        let mapping_service = Arc::new(MappingService::new(repository));
        let redirect_service = Arc::new(RedirectService::new(
            mapping_service.clone(),
            cache.clone(),
        ));

        Self {
            mapping_service,
            redirect_service,
            cache,
        }
    }
}
