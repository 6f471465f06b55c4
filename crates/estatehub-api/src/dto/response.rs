//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use estatehub_core::types::PropertyId;
use estatehub_entity::property::{Property, PropertyWithOwner};
use estatehub_entity::user::{User, UserSummary};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Returned by registration and sign-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Always `true`.
    pub success: bool,
    /// The session JWT, also set as the `token` cookie.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// The signed-in user.
    pub user: User,
}

/// A listing as rendered on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    /// Listing fields.
    #[serde(flatten)]
    pub property: Property,
    /// Populated owner, on single-listing responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,
    /// Price in Rand, e.g. `R 1 250 000,00`.
    pub formatted_price: String,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            formatted_price: property.formatted_price(),
            owner: None,
            property,
        }
    }
}

impl From<PropertyWithOwner> for PropertyResponse {
    fn from(populated: PropertyWithOwner) -> Self {
        Self {
            formatted_price: populated.property.formatted_price(),
            owner: populated.owner,
            property: populated.property,
        }
    }
}

/// Returned by a listing update.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyUpdatedResponse {
    /// Always `true`.
    pub success: bool,
    /// `"Property updated successfully"`.
    pub message: String,
    /// The listing after the update.
    pub property: PropertyResponse,
}

/// Returned by a listing delete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDeletedResponse {
    /// Always `true`.
    pub success: bool,
    /// `"Property deleted successfully"`.
    pub message: String,
    /// The removed listing.
    pub deleted_property_id: PropertyId,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Backing store: `postgres` or `memory`.
    pub database: String,
}
