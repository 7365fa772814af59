//! Cache key generators for consistent key naming.

use ecommerce_core::{Entity, EntityId};

/// Generate the cache key for an entity by ID, e.g. `user:42`.
#[must_use]
pub fn entity_key<E: Entity>(id: EntityId) -> String {
    format!("{}:{}", E::KIND, id)
}
