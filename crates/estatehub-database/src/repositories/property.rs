//! Property repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;

use estatehub_core::error::AppError;
use estatehub_core::result::AppResult;
use estatehub_core::types::pagination::{PageRequest, PageResponse};
use estatehub_core::types::{PropertyId, UserId};
use estatehub_entity::property::{CreateProperty, Property, images_or_placeholder};

use super::db_error;
use crate::store::{PROPERTY_IN_USE_MESSAGE, PropertyStore};

/// PostgreSQL-backed listing store.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyStore for PropertyRepository {
    async fn find_by_id(&self, id: PropertyId) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find property"))
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count properties"))?;

        let limit = i64::try_from(page.limit())
            .map_err(|_| AppError::validation("Page size out of range"))?;
        let offset = i64::try_from(page.offset())
            .map_err(|_| AppError::validation("Page number out of range"))?;

        let items = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list properties"))?;

        Ok(PageResponse::new(items, page, u64::try_from(total).unwrap_or(0)))
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list owner properties"))
    }

    async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        let now = Utc::now();
        sqlx::query_as::<_, Property>(
            r#"INSERT INTO properties
                 (id, title, description, price, location, address, property_type,
                  features, images, status, owner_id, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
               RETURNING *"#,
        )
        .bind(PropertyId::new())
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price)
        .bind(&data.location)
        .bind(Json(&data.address))
        .bind(data.property_type)
        .bind(Json(&data.features))
        .bind(images_or_placeholder(data.images.clone()))
        .bind(data.status)
        .bind(data.owner_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create property"))
    }

    async fn update(&self, property: &Property) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>(
            r#"UPDATE properties
               SET title = $2, description = $3, price = $4, location = $5,
                   address = $6, property_type = $7, features = $8, images = $9,
                   status = $10, updated_at = $11
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(property.id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(property.price)
        .bind(&property.location)
        .bind(&property.address)
        .bind(property.property_type)
        .bind(&property.features)
        .bind(images_or_placeholder(property.images.clone()))
        .bind(property.status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update property"))
    }

    async fn delete(&self, id: PropertyId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_foreign_key_violation() {
                        return AppError::validation(PROPERTY_IN_USE_MESSAGE);
                    }
                }
                db_error("Failed to delete property")(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
