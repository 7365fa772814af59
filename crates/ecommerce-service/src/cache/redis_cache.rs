//! Redis-based cache implementation.

use super::{cache_keys, CacheRepository};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, Runtime};
use ecommerce_config::RedisConfig;
use ecommerce_core::{EcommerceError, EcommerceResult, Entity, EntityId};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default TTL for cached entities (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Builds the shared Redis pool, or `None` when Redis is disabled.
///
/// No connection is opened here; the first cache call connects. An
/// unreachable server therefore only shows up as per-request cache errors.
pub fn create_redis_pool(config: &RedisConfig) -> EcommerceResult<Option<Arc<Pool>>> {
    if !config.enabled {
        info!("Redis disabled, entity caching is off");
        return Ok(None);
    }

    let pool = deadpool_redis::Config::from_url(config.url())
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| EcommerceError::Configuration(format!("Invalid Redis configuration: {}", e)))?;

    info!(addr = %config.addr, "Redis cache pool created");
    Ok(Some(Arc::new(pool)))
}

/// Redis-backed cache for one entity kind.
pub struct RedisCacheRepository<E> {
    /// Redis connection pool, `None` when caching is disabled.
    pool: Option<Arc<Pool>>,
    /// TTL applied on every write.
    ttl: Duration,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> RedisCacheRepository<E> {
    /// Create a new Redis cache repository.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self::with_ttl(pool, DEFAULT_TTL)
    }

    /// Create a cache repository with a custom TTL.
    #[must_use]
    pub fn with_ttl(pool: Arc<Pool>, ttl: Duration) -> Self {
        Self {
            pool: Some(pool),
            ttl,
            _entity: PhantomData,
        }
    }

    /// Create a no-op cache repository (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            ttl: DEFAULT_TTL,
            _entity: PhantomData,
        }
    }

    /// Builds from an optional pool, as returned by [`create_redis_pool`].
    #[must_use]
    pub fn from_pool(pool: Option<Arc<Pool>>) -> Self {
        pool.map_or_else(Self::disabled, Self::new)
    }

    /// Check if caching is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_conn(&self) -> EcommerceResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                EcommerceError::cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(EcommerceError::cache("Cache is disabled")),
        }
    }
}

#[async_trait]
impl<E: Entity> CacheRepository<E> for RedisCacheRepository<E> {
    async fn set(&self, entity: &E) -> EcommerceResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let key = cache_keys::entity_key::<E>(entity.id());
        let json = serde_json::to_string(entity).map_err(|e| {
            EcommerceError::cache(format!("Failed to encode {} for key '{}': {}", E::KIND, key, e))
        })?;

        let mut conn = self.get_conn().await?;
        let ttl_secs = self.ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(&key, json, ttl_secs).await.map_err(|e| {
            EcommerceError::cache(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn get(&self, id: EntityId) -> EcommerceResult<Option<E>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let key = cache_keys::entity_key::<E>(id);
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(&key).await.map_err(|e| {
            EcommerceError::cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        match value {
            Some(json) => {
                debug!("Cache hit for key '{}'", key);
                let entity = serde_json::from_str(&json).map_err(|e| {
                    EcommerceError::cache(format!("Corrupt value under key '{}': {}", key, e))
                })?;
                Ok(Some(entity))
            }
            None => {
                debug!("Cache miss for key '{}'", key);
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: EntityId) -> EcommerceResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let key = cache_keys::entity_key::<E>(id);
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(&key).await.map_err(|e| {
            EcommerceError::cache(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecommerce_core::{Product, User};

    #[test]
    fn test_disabled_cache() {
        let cache = RedisCacheRepository::<User>::disabled();
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_cache_is_a_no_op() {
        let cache = RedisCacheRepository::<Product>::disabled();
        let product = Product {
            id: EntityId::new(1),
            ..Product::new("Widget", "", 1.0)
        };

        cache.set(&product).await.unwrap();
        assert!(cache.get(product.id).await.unwrap().is_none());
        cache.delete(product.id).await.unwrap();
    }

    #[test]
    fn test_disabled_config_yields_no_pool() {
        let config = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };
        assert!(create_redis_pool(&config).unwrap().is_none());
        assert!(!RedisCacheRepository::<User>::from_pool(None).is_enabled());
    }

    #[tokio::test]
    async fn test_pool_creation_does_not_connect() {
        // Nothing listens on port 1; creating the pool must still succeed.
        let config = RedisConfig {
            addr: "127.0.0.1:1".to_string(),
            enabled: true,
        };
        let pool = create_redis_pool(&config).unwrap();
        let cache = RedisCacheRepository::<User>::from_pool(pool);
        assert!(cache.is_enabled());

        let err = cache.get(EntityId::new(1)).await.unwrap_err();
        assert!(matches!(err, EcommerceError::Cache(_)));
    }
}
