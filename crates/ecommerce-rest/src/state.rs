//! Application state for Axum handlers.

use ecommerce_core::Entity;
use ecommerce_service::EntityService;
use std::sync::Arc;

/// Shared application state for one entity kind.
pub struct AppState<E: Entity> {
    pub service: Arc<dyn EntityService<E>>,
}

impl<E: Entity> AppState<E> {
    /// Creates a new application state.
    pub fn new(service: Arc<dyn EntityService<E>>) -> Self {
        Self { service }
    }
}

impl<E: Entity> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
