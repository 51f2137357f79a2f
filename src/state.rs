use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteMappingRepository;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService<SqliteMappingRepository>>,
}

impl AppState {
    pub fn new(mapping_service: Arc<MappingService<SqliteMappingRepository>>) -> Self {
        Self { mapping_service }
    }
}
