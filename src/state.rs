use std::sync::Arc;

use crate::application::services::PageService;
use crate::infrastructure::cache::ResponseCache;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService>,
    pub cache: Arc<dyn ResponseCache>,
}

impl AppState {
    pub fn new(page_service: Arc<PageService>, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            page_service,
            cache,
        }
    }
}
