//! Entity service trait.

use async_trait::async_trait;
use ecommerce_core::{EcommerceResult, Entity, EntityId};

/// Entity service trait for create/read operations.
#[async_trait]
pub trait EntityService<E: Entity>: Send + Sync {
    /// Creates an entity from a request and returns it with its assigned
    /// identifier and timestamps.
    async fn create(&self, request: E::CreateRequest) -> EcommerceResult<E>;

    /// Gets an entity by ID. `Ok(None)` means no such entity.
    async fn get_by_id(&self, id: EntityId) -> EcommerceResult<Option<E>>;
}
