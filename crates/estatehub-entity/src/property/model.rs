//! Property entity model.

use chrono::{DateTime, Utc};
use estatehub_core::types::{PropertyId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use super::address::Address;
use super::features::PropertyFeatures;
use super::kind::PropertyType;
use super::price::format_rand;
use super::status::ListingStatus;
use crate::user::UserSummary;

/// Image stored when a listing is saved without any pictures.
pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/800x600/e2e8f0/1e293b.png?text=Property+Image";

/// A property listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique listing identifier.
    pub id: PropertyId,
    /// Headline, at most 100 characters.
    pub title: String,
    /// Free-text description, at most 1000 characters.
    pub description: String,
    /// Asking price in rand.
    pub price: f64,
    /// Suburb or area shown on cards.
    pub location: String,
    /// Postal address.
    pub address: Json<Address>,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Rooms and amenities.
    pub features: Json<PropertyFeatures>,
    /// Image URLs; never empty.
    pub images: Vec<String>,
    /// Market status.
    pub status: ListingStatus,
    /// The listing owner.
    pub owner_id: UserId,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Price formatted as rand.
    pub fn formatted_price(&self) -> String {
        format_rand(self.price)
    }

    /// The `{ id, title, images }` view embedded in enquiries.
    pub fn summary(&self) -> PropertySummary {
        PropertySummary {
            id: self.id,
            title: self.title.clone(),
            images: self.images.clone(),
        }
    }
}

/// A partial update of the editable listing fields.
///
/// Owner, id and timestamps are not editable.
#[derive(Debug, Clone, Default)]
pub struct PropertyChanges {
    /// New headline.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New location.
    pub location: Option<String>,
    /// New address.
    pub address: Option<Address>,
    /// New kind.
    pub property_type: Option<PropertyType>,
    /// New features.
    pub features: Option<PropertyFeatures>,
    /// New images; an empty list becomes the placeholder.
    pub images: Option<Vec<String>>,
    /// New status.
    pub status: Option<ListingStatus>,
}

impl Property {
    /// Apply every present field of `changes`.
    pub fn apply(&mut self, changes: PropertyChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(address) = changes.address {
            self.address = Json(address);
        }
        if let Some(property_type) = changes.property_type {
            self.property_type = property_type;
        }
        if let Some(features) = changes.features {
            self.features = Json(features);
        }
        if let Some(images) = changes.images {
            self.images = images_or_placeholder(images);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }
}

/// Replace an empty image list with the placeholder.
pub fn images_or_placeholder(images: Vec<String>) -> Vec<String> {
    if images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        images
    }
}

/// Data required to create a new listing.
#[derive(Debug, Clone)]
pub struct CreateProperty {
    /// Headline.
    pub title: String,
    /// Description.
    pub description: String,
    /// Asking price in rand.
    pub price: f64,
    /// Suburb or area.
    pub location: String,
    /// Postal address.
    pub address: Address,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Rooms and amenities.
    pub features: PropertyFeatures,
    /// Image URLs.
    pub images: Vec<String>,
    /// Market status.
    pub status: ListingStatus,
    /// The creating user.
    pub owner_id: UserId,
}

/// A listing with its owner populated next to the canonical `ownerId`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWithOwner {
    /// The listing.
    #[serde(flatten)]
    pub property: Property,
    /// The owner, when the account still exists.
    pub owner: Option<UserSummary>,
}

/// Populated listing reference embedded in enquiry responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    /// Listing identifier.
    pub id: PropertyId,
    /// Headline.
    pub title: String,
    /// Image URLs.
    pub images: Vec<String>,
}
