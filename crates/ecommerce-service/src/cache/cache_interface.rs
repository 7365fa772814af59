//! Cache interface trait for entity caching.

use async_trait::async_trait;
use ecommerce_core::{EcommerceResult, Entity, EntityId};

/// Key/value cache for one entity kind.
///
/// Errors returned here are never fatal to a request; the service logs and
/// discards them.
#[async_trait]
pub trait CacheRepository<E: Entity>: Send + Sync {
    /// Stores the entity under its identifier, replacing any previous value.
    async fn set(&self, entity: &E) -> EcommerceResult<()>;

    /// Looks up an entity.
    ///
    /// Returns `Ok(None)` on a miss or an expired entry.
    async fn get(&self, id: EntityId) -> EcommerceResult<Option<E>>;

    /// Removes the entry. Deleting a missing key succeeds.
    async fn delete(&self, id: EntityId) -> EcommerceResult<()>;
}
