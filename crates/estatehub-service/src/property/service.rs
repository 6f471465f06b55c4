//! Listing operations.

use std::sync::Arc;

use tracing::{debug, info};

use estatehub_auth::ownership::{OwnershipAction, OwnershipGuard};
use estatehub_core::error::AppError;
use estatehub_core::types::PropertyId;
use estatehub_core::types::pagination::{PageRequest, PageResponse};
use estatehub_database::store::{
    EnquiryStore, PROPERTY_IN_USE_MESSAGE, PropertyStore, Stores, UserStore,
};
use estatehub_entity::property::{
    CreateProperty, ListingStatus, Property, PropertyChanges, PropertyType, PropertyWithOwner,
    images_or_placeholder,
};

use super::input::PropertyInput;
use crate::context::RequestContext;
use crate::validation::{require_text, validate};

/// Handles listing browsing, creation, update and deletion.
#[derive(Debug, Clone)]
pub struct PropertyService {
    /// Listing store.
    properties: Arc<dyn PropertyStore>,
    /// Enquiry store, consulted before deletes.
    enquiries: Arc<dyn EnquiryStore>,
    /// User store, for populating owners.
    users: Arc<dyn UserStore>,
    /// Owner and admin checks.
    guard: OwnershipGuard,
}

impl PropertyService {
    /// Creates a new property service.
    pub fn new(stores: &Stores, guard: OwnershipGuard) -> Self {
        Self {
            properties: stores.properties.clone(),
            enquiries: stores.enquiries.clone(),
            users: stores.users.clone(),
            guard,
        }
    }

    /// Public listing, newest first.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<Property>, AppError> {
        self.properties.find_page(page).await
    }

    /// A single listing with its owner populated.
    pub async fn get(&self, id: PropertyId) -> Result<PropertyWithOwner, AppError> {
        let property = self.load(id).await?;
        self.with_owner(property).await
    }

    /// The caller's own listings, newest first.
    pub async fn list_owned(&self, ctx: &RequestContext) -> Result<Vec<Property>, AppError> {
        self.properties.find_by_owner(ctx.user_id).await
    }

    /// Create a listing owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: PropertyInput,
    ) -> Result<PropertyWithOwner, AppError> {
        let title = require_text("title", input.title.as_deref())?.to_string();
        let description = require_text("description", input.description.as_deref())?.to_string();
        let price = match &input.price {
            Some(price) if !price.is_blank() => price.clone(),
            _ => return Err(AppError::validation("price is required")),
        };
        let location = require_text("location", input.location.as_deref())?.to_string();
        let property_type = match input.property_type.as_deref().map(str::trim) {
            Some(kind) if !kind.is_empty() => kind.parse::<PropertyType>()?,
            _ => PropertyType::default(),
        };
        let status = parse_status(input.status.as_deref())?.unwrap_or_default();

        validate(&input)?;
        let price = price.to_price()?;
        let address = input
            .address
            .ok_or_else(|| AppError::validation("address is required"))?
            .into_address()?;

        let data = CreateProperty {
            title,
            description,
            price,
            location,
            address,
            property_type,
            features: input.features.map(|f| f.into_features()).unwrap_or_default(),
            images: input
                .images
                .map(|images| images.into_images())
                .unwrap_or_else(|| images_or_placeholder(Vec::new())),
            status,
            owner_id: ctx.user_id,
        };

        let property = self.properties.create(&data).await?;
        info!(
            user_id = %ctx.user_id,
            property_id = %property.id,
            "Property created"
        );
        self.with_owner(property).await
    }

    /// Update a listing. Only the owner may do this (see [`OwnershipGuard`]).
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: PropertyId,
        input: PropertyInput,
    ) -> Result<PropertyWithOwner, AppError> {
        let mut property = self.load(id).await?;
        self.guard
            .check(&property, &ctx.caller(), OwnershipAction::Modify)?;

        let title = require_text("title", input.title.as_deref())?.to_string();
        let description = require_text("description", input.description.as_deref())?.to_string();
        let price = match &input.price {
            Some(price) if !price.is_blank() => price.clone(),
            _ => return Err(AppError::validation("price is required")),
        };
        let location = require_text("location", input.location.as_deref())?.to_string();
        let property_type: PropertyType =
            require_text("propertyType", input.property_type.as_deref())?.parse()?;

        validate(&input)?;

        let changes = PropertyChanges {
            title: Some(title),
            description: Some(description),
            price: Some(price.to_price()?),
            location: Some(location),
            address: input.address.map(|a| a.into_address()).transpose()?,
            property_type: Some(property_type),
            features: input.features.map(|f| f.into_features()),
            images: input.images.map(|images| images.into_images()),
            status: parse_status(input.status.as_deref())?,
        };
        property.apply(changes);

        let updated = self
            .properties
            .update(&property)
            .await?
            .ok_or_else(|| AppError::not_found("Property not found"))?;

        info!(
            user_id = %ctx.user_id,
            property_id = %updated.id,
            "Property updated"
        );
        self.with_owner(updated).await
    }

    /// Delete a listing. The owner or an admin may do this, and only while
    /// no enquiry references it.
    pub async fn delete(&self, ctx: &RequestContext, id: PropertyId) -> Result<PropertyId, AppError> {
        let property = self.load(id).await?;
        self.guard
            .check(&property, &ctx.caller(), OwnershipAction::Delete)?;

        let enquiry_count = self.enquiries.count_for_property(id).await?;
        if enquiry_count > 0 {
            debug!(property_id = %id, enquiry_count, "Delete blocked by enquiries");
            return Err(AppError::validation(PROPERTY_IN_USE_MESSAGE));
        }

        if !self.properties.delete(id).await? {
            return Err(AppError::not_found("Property not found"));
        }

        info!(
            user_id = %ctx.user_id,
            property_id = %id,
            admin = ctx.is_admin() && property.owner_id != ctx.user_id,
            "Property deleted"
        );
        Ok(id)
    }

    async fn load(&self, id: PropertyId) -> Result<Property, AppError> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Property not found"))
    }

    async fn with_owner(&self, property: Property) -> Result<PropertyWithOwner, AppError> {
        let owner = self
            .users
            .find_by_id(property.owner_id)
            .await?
            .map(|user| user.summary());
        Ok(PropertyWithOwner { property, owner })
    }
}

fn parse_status(status: Option<&str>) -> Result<Option<ListingStatus>, AppError> {
    match status.map(str::trim) {
        Some(s) if !s.is_empty() => s.parse().map(Some),
        _ => Ok(None),
    }
}
