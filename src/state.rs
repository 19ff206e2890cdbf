use std::sync::Arc;

use crate::application::services::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }
}
