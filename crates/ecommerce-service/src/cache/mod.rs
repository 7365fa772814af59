//! Caching infrastructure for the service layer.
//!
//! Entities are cached as JSON under `<kind>:<id>` with a fixed TTL.
//! Callers treat every cache failure as advisory.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::CacheRepository;
pub use redis_cache::{create_redis_pool, RedisCacheRepository, DEFAULT_TTL};
