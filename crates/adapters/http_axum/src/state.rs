//! Shared application state for axum handlers.

use std::sync::Arc;

use muebles_app::ports::FurnitureRepository;
use muebles_app::services::furniture_service::FurnitureService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<FR> {
    /// Furniture CRUD service.
    pub furniture_service: Arc<FurnitureService<FR>>,
}

impl<FR> Clone for AppState<FR> {
    fn clone(&self) -> Self {
        Self {
            furniture_service: Arc::clone(&self.furniture_service),
        }
    }
}

impl<FR> AppState<FR>
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(furniture_service: FurnitureService<FR>) -> Self {
        Self {
            furniture_service: Arc::new(furniture_service),
        }
    }
}
