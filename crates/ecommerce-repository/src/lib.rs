//! # Ecommerce Repository
//!
//! Persistent store layer for the users and products services.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn EntityRepository<E>>
//! PgUserRepository / PgProductRepository
//!   ↓  DatabasePool (SQLx)
//! PostgreSQL
//! ```
//!
//! Identifiers and both timestamps are assigned by PostgreSQL on insert and
//! written back into the caller's entity.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
