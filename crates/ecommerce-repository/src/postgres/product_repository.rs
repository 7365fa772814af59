//! PostgreSQL product repository implementation.

use crate::{DatabasePool, EntityRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ecommerce_core::{EcommerceResult, EntityId, Product};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Table definition for products.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(200) NOT NULL,
    description TEXT,
    price DECIMAL(10,2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// PostgreSQL product repository.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: Arc<DatabasePool>,
}

impl PgProductRepository {
    /// Creates a new PostgreSQL product repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
///
/// `price` is read back as FLOAT8; the column keeps two decimal places.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: EntityId::new(row.id),
            name: row.name,
            description: row.description.unwrap_or_default(),
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct InsertedRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl EntityRepository<Product> for PgProductRepository {
    async fn create(&self, product: &mut Product) -> EcommerceResult<()> {
        debug!("Inserting product: {}", product.name);

        let row = sqlx::query_as::<_, InsertedRow>(
            r#"
            INSERT INTO products (name, description, price, created_at, updated_at)
            VALUES ($1, $2, CAST($3 AS DECIMAL(10,2)), NOW(), NOW())
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(self.pool.inner())
        .await?;

        product.id = EntityId::new(row.id);
        product.created_at = row.created_at;
        product.updated_at = row.updated_at;
        Ok(())
    }

    async fn get_by_id(&self, id: EntityId) -> EcommerceResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price::FLOAT8 AS price, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }
}
