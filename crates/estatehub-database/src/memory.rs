//! In-memory store implementations for tests and single-process development.
//!
//! All three stores share one set of tables behind a Tokio `RwLock`, so
//! cross-table rules (the enquiry reference check on delete) hold the same
//! way the PostgreSQL foreign keys enforce them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;
use tracing::debug;

use estatehub_core::error::AppError;
use estatehub_core::result::AppResult;
use estatehub_core::types::pagination::{PageRequest, PageResponse};
use estatehub_core::types::{EnquiryId, PropertyId, UserId};
use estatehub_entity::enquiry::{CreateEnquiry, Enquiry, EnquiryStatus};
use estatehub_entity::property::{CreateProperty, Property, images_or_placeholder};
use estatehub_entity::user::{CreateUser, User, normalize_email};

use crate::store::{
    DUPLICATE_USER_MESSAGE, EnquiryStore, PROPERTY_IN_USE_MESSAGE, PropertyStore, UserStore,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    properties: HashMap<PropertyId, Property>,
    enquiries: HashMap<EnquiryId, Enquiry>,
}

/// Process-local database shared by the memory stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// User store handle.
    pub fn users(&self) -> MemoryUserStore {
        MemoryUserStore { db: self.clone() }
    }

    /// Listing store handle.
    pub fn properties(&self) -> MemoryPropertyStore {
        MemoryPropertyStore { db: self.clone() }
    }

    /// Enquiry store handle.
    pub fn enquiries(&self) -> MemoryEnquiryStore {
        MemoryEnquiryStore { db: self.clone() }
    }
}

/// Newest first, by creation time.
fn newest_first<T>(items: &mut [T], created: impl Fn(&T) -> chrono::DateTime<Utc>) {
    items.sort_by_key(|item| std::cmp::Reverse(created(item)));
}

/// In-memory [`UserStore`].
#[derive(Debug, Clone)]
pub struct MemoryUserStore {
    db: MemoryDatabase,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.db.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = normalize_email(email);
        let tables = self.db.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let email = normalize_email(&data.email);
        let mut tables = self.db.tables.write().await;
        if tables.users.values().any(|u| u.email == email) {
            return Err(AppError::validation(DUPLICATE_USER_MESSAGE));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: data.name.trim().to_string(),
            email,
            password_hash: data.password_hash.clone(),
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        debug!(user_id = %user.id, "Inserted user into memory store");
        Ok(user)
    }
}

/// In-memory [`PropertyStore`].
#[derive(Debug, Clone)]
pub struct MemoryPropertyStore {
    db: MemoryDatabase,
}

#[async_trait]
impl PropertyStore for MemoryPropertyStore {
    async fn find_by_id(&self, id: PropertyId) -> AppResult<Option<Property>> {
        Ok(self.db.tables.read().await.properties.get(&id).cloned())
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let tables = self.db.tables.read().await;
        let mut all: Vec<Property> = tables.properties.values().cloned().collect();
        newest_first(&mut all, |p| p.created_at);

        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();
        Ok(PageResponse::new(items, page, total))
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Property>> {
        let tables = self.db.tables.read().await;
        let mut owned: Vec<Property> = tables
            .properties
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        newest_first(&mut owned, |p| p.created_at);
        Ok(owned)
    }

    async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        let now = Utc::now();
        let property = Property {
            id: PropertyId::new(),
            title: data.title.clone(),
            description: data.description.clone(),
            price: data.price,
            location: data.location.clone(),
            address: Json(data.address.clone()),
            property_type: data.property_type,
            features: Json(data.features.clone()),
            images: images_or_placeholder(data.images.clone()),
            status: data.status,
            owner_id: data.owner_id,
            created_at: now,
            updated_at: now,
        };
        self.db
            .tables
            .write()
            .await
            .properties
            .insert(property.id, property.clone());
        Ok(property)
    }

    async fn update(&self, property: &Property) -> AppResult<Option<Property>> {
        let mut tables = self.db.tables.write().await;
        let Some(stored) = tables.properties.get_mut(&property.id) else {
            return Ok(None);
        };

        stored.title = property.title.clone();
        stored.description = property.description.clone();
        stored.price = property.price;
        stored.location = property.location.clone();
        stored.address = property.address.clone();
        stored.property_type = property.property_type;
        stored.features = property.features.clone();
        stored.images = images_or_placeholder(property.images.clone());
        stored.status = property.status;
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: PropertyId) -> AppResult<bool> {
        let mut tables = self.db.tables.write().await;
        if tables.enquiries.values().any(|e| e.property_id == id) {
            return Err(AppError::validation(PROPERTY_IN_USE_MESSAGE));
        }
        Ok(tables.properties.remove(&id).is_some())
    }
}

/// In-memory [`EnquiryStore`].
#[derive(Debug, Clone)]
pub struct MemoryEnquiryStore {
    db: MemoryDatabase,
}

#[async_trait]
impl EnquiryStore for MemoryEnquiryStore {
    async fn find_by_id(&self, id: EnquiryId) -> AppResult<Option<Enquiry>> {
        Ok(self.db.tables.read().await.enquiries.get(&id).cloned())
    }

    async fn find_by_recipient(&self, recipient_id: UserId) -> AppResult<Vec<Enquiry>> {
        let tables = self.db.tables.read().await;
        let mut received: Vec<Enquiry> = tables
            .enquiries
            .values()
            .filter(|e| e.recipient_id == recipient_id)
            .cloned()
            .collect();
        newest_first(&mut received, |e| e.created_at);
        Ok(received)
    }

    async fn count_for_property(&self, property_id: PropertyId) -> AppResult<u64> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .enquiries
            .values()
            .filter(|e| e.property_id == property_id)
            .count() as u64)
    }

    async fn create(&self, data: &CreateEnquiry) -> AppResult<Enquiry> {
        let mut tables = self.db.tables.write().await;
        if !tables.properties.contains_key(&data.property_id) {
            return Err(AppError::not_found("Property not found"));
        }

        let now = Utc::now();
        let enquiry = Enquiry {
            id: EnquiryId::new(),
            sender_id: data.sender_id,
            recipient_id: data.recipient_id,
            property_id: data.property_id,
            message: data.message.clone(),
            status: EnquiryStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.enquiries.insert(enquiry.id, enquiry.clone());
        Ok(enquiry)
    }

    async fn update_status(
        &self,
        id: EnquiryId,
        status: EnquiryStatus,
    ) -> AppResult<Option<Enquiry>> {
        let mut tables = self.db.tables.write().await;
        Ok(tables.enquiries.get_mut(&id).map(|enquiry| {
            enquiry.status = status;
            enquiry.updated_at = Utc::now();
            enquiry.clone()
        }))
    }
}
