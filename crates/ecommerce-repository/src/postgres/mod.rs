//! PostgreSQL repository implementations.

mod product_repository;
mod user_repository;

pub use product_repository::{PgProductRepository, CREATE_PRODUCTS_TABLE};
pub use user_repository::{PgUserRepository, CREATE_USERS_TABLE};

use crate::{DatabasePool, EntityRepository};
use ecommerce_core::{Entity, Product, User};
use std::sync::Arc;

/// An entity kind with a PostgreSQL-backed repository.
///
/// Lets the composition root build the store layer for any service
/// without naming the concrete repository type.
pub trait PostgresEntity: Entity {
    /// Repository type for this kind.
    type Repository: EntityRepository<Self> + 'static;

    /// `CREATE TABLE IF NOT EXISTS` statements for this kind.
    const SCHEMA: &'static [&'static str];

    /// Builds the repository over a shared pool.
    fn repository(pool: Arc<DatabasePool>) -> Self::Repository;
}

impl PostgresEntity for User {
    type Repository = PgUserRepository;

    const SCHEMA: &'static [&'static str] = &[CREATE_USERS_TABLE];

    fn repository(pool: Arc<DatabasePool>) -> Self::Repository {
        PgUserRepository::new(pool)
    }
}

impl PostgresEntity for Product {
    type Repository = PgProductRepository;

    const SCHEMA: &'static [&'static str] = &[CREATE_PRODUCTS_TABLE];

    fn repository(pool: Arc<DatabasePool>) -> Self::Repository {
        PgProductRepository::new(pool)
    }
}
