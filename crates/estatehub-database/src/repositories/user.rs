//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use estatehub_core::error::AppError;
use estatehub_core::result::AppResult;
use estatehub_core::types::UserId;
use estatehub_entity::user::{CreateUser, User, normalize_email};

use super::db_error;
use crate::store::{DUPLICATE_USER_MESSAGE, UserStore};

/// PostgreSQL-backed user store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = $1")
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let now = Utc::now();
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $6)
               RETURNING *"#,
        )
        .bind(UserId::new())
        .bind(data.name.trim())
        .bind(normalize_email(&data.email))
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::validation(DUPLICATE_USER_MESSAGE);
                }
            }
            db_error("Failed to create user")(e)
        })
    }
}
