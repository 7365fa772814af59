//! Dependency wiring.
//!
//! Builds the object graph of one entity service by hand:
//!
//! ```text
//! DatabasePool ──> PgUserRepository / PgProductRepository ─┐
//!                                                          ├──> EntityServiceImpl<E>
//! Redis pool ────> RedisCacheRepository<E> ────────────────┘
//! ```

use ecommerce_config::AppConfig;
use ecommerce_core::EcommerceResult;
use ecommerce_repository::{create_pool, DatabasePool, EntityRepository, PostgresEntity};
use ecommerce_service::{
    create_redis_pool, CacheRepository, EntityService, EntityServiceImpl, RedisCacheRepository,
};
use std::sync::Arc;
use tracing::info;

/// Wired components of one entity service.
pub struct ServiceModule<E: PostgresEntity> {
    db_pool: Arc<DatabasePool>,
    entity_service: Arc<dyn EntityService<E>>,
}

impl<E: PostgresEntity> ServiceModule<E> {
    /// Connects to the store, ensures the schema, and wires the service.
    ///
    /// Fails if PostgreSQL is unreachable. Redis is only contacted on first
    /// use.
    pub async fn build(config: &AppConfig) -> EcommerceResult<Self> {
        let db_pool = create_pool(&config.database).await?;
        db_pool.ensure_schema(E::SCHEMA).await?;

        let repository: Arc<dyn EntityRepository<E>> =
            Arc::new(E::repository(Arc::clone(&db_pool)));

        let cache = RedisCacheRepository::<E>::from_pool(create_redis_pool(&config.redis)?);
        let cache_enabled = cache.is_enabled();
        let cache: Arc<dyn CacheRepository<E>> = Arc::new(cache);

        let entity_service: Arc<dyn EntityService<E>> =
            Arc::new(EntityServiceImpl::new(repository, cache));

        info!(kind = E::KIND, cache_enabled, "Service module built");

        Ok(Self {
            db_pool,
            entity_service,
        })
    }

    /// Returns the entity service.
    #[must_use]
    pub fn entity_service(&self) -> Arc<dyn EntityService<E>> {
        Arc::clone(&self.entity_service)
    }

    /// Returns the database pool.
    #[must_use]
    pub fn database_pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.db_pool)
    }
}
