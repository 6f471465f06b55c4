//! Store traits consumed by the service layer.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory one in [`crate::memory`]. Both report a duplicate
//! email as `"User already exists"` and refuse to delete a listing that
//! still has enquiries.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use estatehub_core::result::AppResult;
use estatehub_core::types::pagination::{PageRequest, PageResponse};
use estatehub_core::types::{EnquiryId, PropertyId, UserId};
use estatehub_entity::enquiry::{CreateEnquiry, Enquiry, EnquiryStatus};
use estatehub_entity::property::{CreateProperty, Property};
use estatehub_entity::user::{CreateUser, User};

use crate::connection;
use crate::memory::MemoryDatabase;
use crate::repositories::{EnquiryRepository, PropertyRepository, UserRepository};

/// Message for a registration that collides with an existing email.
pub const DUPLICATE_USER_MESSAGE: &str = "User already exists";
/// Message for deleting a listing that enquiries still reference.
pub const PROPERTY_IN_USE_MESSAGE: &str = "Cannot delete property with active enquiries";

/// Credential store: user accounts keyed by id and normalized email.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email, ignoring case and surrounding whitespace.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user with a lowercased email.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Listing store.
#[async_trait]
pub trait PropertyStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a listing by primary key.
    async fn find_by_id(&self, id: PropertyId) -> AppResult<Option<Property>>;

    /// One page of all listings, newest first.
    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Property>>;

    /// Every listing owned by `owner_id`, newest first.
    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Property>>;

    /// Insert a new listing.
    async fn create(&self, data: &CreateProperty) -> AppResult<Property>;

    /// Persist the editable fields of `property` and bump `updated_at`.
    ///
    /// Returns `None` when the listing no longer exists.
    async fn update(&self, property: &Property) -> AppResult<Option<Property>>;

    /// Delete a listing. Returns `false` when it did not exist.
    async fn delete(&self, id: PropertyId) -> AppResult<bool>;
}

/// Enquiry store.
#[async_trait]
pub trait EnquiryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an enquiry by primary key.
    async fn find_by_id(&self, id: EnquiryId) -> AppResult<Option<Enquiry>>;

    /// Enquiries addressed to `recipient_id`, newest first.
    async fn find_by_recipient(&self, recipient_id: UserId) -> AppResult<Vec<Enquiry>>;

    /// Number of enquiries about a listing, regardless of status.
    async fn count_for_property(&self, property_id: PropertyId) -> AppResult<u64>;

    /// Insert a new enquiry with status `pending`.
    async fn create(&self, data: &CreateEnquiry) -> AppResult<Enquiry>;

    /// Set the status of an enquiry. Returns `None` when it does not exist.
    async fn update_status(
        &self,
        id: EnquiryId,
        status: EnquiryStatus,
    ) -> AppResult<Option<Enquiry>>;
}

/// Where the stores keep their data.
#[derive(Debug, Clone)]
enum Backend {
    Postgres(PgPool),
    Memory,
}

/// The three stores, shared by every service.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Listings.
    pub properties: Arc<dyn PropertyStore>,
    /// Enquiries.
    pub enquiries: Arc<dyn EnquiryStore>,
    backend: Backend,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            properties: Arc::new(PropertyRepository::new(pool.clone())),
            enquiries: Arc::new(EnquiryRepository::new(pool.clone())),
            backend: Backend::Postgres(pool),
        }
    }

    /// Stores backed by a fresh in-memory database.
    pub fn memory() -> Self {
        let db = MemoryDatabase::new();
        Self {
            users: Arc::new(db.users()),
            properties: Arc::new(db.properties()),
            enquiries: Arc::new(db.enquiries()),
            backend: Backend::Memory,
        }
    }

    /// Short name of the backing store, reported by the health endpoint.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Confirm the backing store can serve queries.
    pub async fn health_check(&self) -> AppResult<()> {
        match &self.backend {
            Backend::Postgres(pool) => connection::ping(pool).await,
            Backend::Memory => Ok(()),
        }
    }
}
