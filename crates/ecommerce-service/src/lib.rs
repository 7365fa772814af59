//! # Ecommerce Service
//!
//! Orchestration layer of the users and products services. A single
//! generic [`EntityServiceImpl`] applies the cache-aside policy over an
//! [`EntityRepository`](ecommerce_repository::EntityRepository) and a
//! [`CacheRepository`].

pub mod cache;
pub mod entity_service;
pub mod r#impl;

pub use cache::*;
pub use entity_service::*;
pub use r#impl::EntityServiceImpl;
