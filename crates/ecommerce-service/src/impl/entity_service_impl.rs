//! Cache-aside entity service.

use crate::cache::CacheRepository;
use crate::entity_service::EntityService;
use async_trait::async_trait;
use ecommerce_core::{EcommerceResult, Entity, EntityId};
use ecommerce_repository::EntityRepository;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Generic entity service.
///
/// The store is the source of truth. The cache is written after every
/// successful create and every store read, and is consulted before the
/// store on reads. Cache failures never reach the caller.
pub struct EntityServiceImpl<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    cache: Arc<dyn CacheRepository<E>>,
}

impl<E: Entity> EntityServiceImpl<E> {
    /// Creates a new entity service.
    pub fn new(
        repository: Arc<dyn EntityRepository<E>>,
        cache: Arc<dyn CacheRepository<E>>,
    ) -> Self {
        Self { repository, cache }
    }

    async fn write_through(&self, entity: &E) {
        if let Err(e) = self.cache.set(entity).await {
            warn!(kind = E::KIND, id = %entity.id(), error = %e, "Failed to cache entity");
        }
    }
}

#[async_trait]
impl<E: Entity> EntityService<E> for EntityServiceImpl<E> {
    async fn create(&self, request: E::CreateRequest) -> EcommerceResult<E> {
        info!(kind = E::KIND, "Creating {}", E::KIND);

        let mut entity = E::from_request(request);
        if let Err(e) = self.repository.create(&mut entity).await {
            error!(kind = E::KIND, error = %e, "Failed to create {} in database", E::KIND);
            return Err(e);
        }

        self.write_through(&entity).await;

        info!(kind = E::KIND, id = %entity.id(), "{} created", E::LABEL);
        Ok(entity)
    }

    async fn get_by_id(&self, id: EntityId) -> EcommerceResult<Option<E>> {
        match self.cache.get(id).await {
            Ok(Some(entity)) => {
                debug!(kind = E::KIND, id = %id, "{} found in cache", E::LABEL);
                return Ok(Some(entity));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    kind = E::KIND, id = %id, error = %e,
                    "Failed to read {} from cache", E::KIND
                );
            }
        }

        let entity = match self.repository.get_by_id(id).await {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                info!(kind = E::KIND, id = %id, "{} not found", E::LABEL);
                return Ok(None);
            }
            Err(e) => {
                error!(
                    kind = E::KIND, id = %id, error = %e,
                    "Failed to get {} from database", E::KIND
                );
                return Err(e);
            }
        };

        self.write_through(&entity).await;

        debug!(kind = E::KIND, id = %id, "{} loaded from database", E::LABEL);
        Ok(Some(entity))
    }
}
