//! PostgreSQL user repository implementation.

use crate::{DatabasePool, EntityRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ecommerce_core::{EcommerceResult, EntityId, User};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Table definition for users.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// PostgreSQL user repository.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Arc<DatabasePool>,
}

impl PgUserRepository {
    /// Creates a new PostgreSQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: EntityId::new(row.id),
            name: row.name,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Columns the store assigns on insert.
#[derive(Debug, FromRow)]
struct InsertedRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl EntityRepository<User> for PgUserRepository {
    async fn create(&self, user: &mut User) -> EcommerceResult<()> {
        debug!("Inserting user: {}", user.email);

        let row = sqlx::query_as::<_, InsertedRow>(
            r#"
            INSERT INTO users (name, email, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(self.pool.inner())
        .await?;

        user.id = EntityId::new(row.id);
        user.created_at = row.created_at;
        user.updated_at = row.updated_at;
        Ok(())
    }

    async fn get_by_id(&self, id: EntityId) -> EcommerceResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }
}
