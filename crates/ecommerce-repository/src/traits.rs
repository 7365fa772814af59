//! Repository trait definitions.

use async_trait::async_trait;
use ecommerce_core::{EcommerceResult, Entity, EntityId};

/// Persistent store for one entity kind.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Inserts a new entity.
    ///
    /// On success the store has written `id`, `created_at` and `updated_at`
    /// back into `entity`. On failure `entity` is left as it was.
    async fn create(&self, entity: &mut E) -> EcommerceResult<()>;

    /// Finds an entity by ID.
    ///
    /// Returns `Ok(None)` when no row matches.
    async fn get_by_id(&self, id: EntityId) -> EcommerceResult<Option<E>>;
}
