//! Enquiry repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use estatehub_core::result::AppResult;
use estatehub_core::types::{EnquiryId, PropertyId, UserId};
use estatehub_entity::enquiry::{CreateEnquiry, Enquiry, EnquiryStatus};

use super::db_error;
use crate::store::EnquiryStore;

/// PostgreSQL-backed enquiry store.
#[derive(Debug, Clone)]
pub struct EnquiryRepository {
    pool: PgPool,
}

impl EnquiryRepository {
    /// Create a new enquiry repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnquiryStore for EnquiryRepository {
    async fn find_by_id(&self, id: EnquiryId) -> AppResult<Option<Enquiry>> {
        sqlx::query_as::<_, Enquiry>("SELECT * FROM enquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find enquiry"))
    }

    async fn find_by_recipient(&self, recipient_id: UserId) -> AppResult<Vec<Enquiry>> {
        sqlx::query_as::<_, Enquiry>(
            "SELECT * FROM enquiries WHERE recipient_id = $1 ORDER BY created_at DESC",
        )
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list enquiries"))
    }

    async fn count_for_property(&self, property_id: PropertyId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM enquiries WHERE property_id = $1")
            .bind(property_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count enquiries"))?;
        Ok(count as u64)
    }

    async fn create(&self, data: &CreateEnquiry) -> AppResult<Enquiry> {
        let now = Utc::now();
        sqlx::query_as::<_, Enquiry>(
            r#"INSERT INTO enquiries
                 (id, sender_id, recipient_id, property_id, message, status, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
               RETURNING *"#,
        )
        .bind(EnquiryId::new())
        .bind(data.sender_id)
        .bind(data.recipient_id)
        .bind(data.property_id)
        .bind(&data.message)
        .bind(EnquiryStatus::Pending)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create enquiry"))
    }

    async fn update_status(
        &self,
        id: EnquiryId,
        status: EnquiryStatus,
    ) -> AppResult<Option<Enquiry>> {
        sqlx::query_as::<_, Enquiry>(
            "UPDATE enquiries SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update enquiry status"))
    }
}
