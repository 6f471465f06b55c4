//! Enquiry entity model.

use chrono::{DateTime, Utc};
use estatehub_core::types::{EnquiryId, PropertyId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::EnquiryStatus;
use crate::property::PropertySummary;
use crate::user::UserSummary;

/// A message from a prospective buyer or tenant to a listing owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    /// Unique enquiry identifier.
    pub id: EnquiryId,
    /// Who sent the enquiry.
    pub sender_id: UserId,
    /// The listing owner at the time of sending.
    pub recipient_id: UserId,
    /// The listing the enquiry is about.
    pub property_id: PropertyId,
    /// Message body.
    pub message: String,
    /// Follow-up state.
    pub status: EnquiryStatus,
    /// When the enquiry was sent.
    pub created_at: DateTime<Utc>,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

/// Data required to record a new enquiry.
#[derive(Debug, Clone)]
pub struct CreateEnquiry {
    /// Sender.
    pub sender_id: UserId,
    /// Recipient (listing owner).
    pub recipient_id: UserId,
    /// Listing.
    pub property_id: PropertyId,
    /// Message body.
    pub message: String,
}

/// An enquiry with sender, recipient and listing populated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDetails {
    /// The enquiry.
    #[serde(flatten)]
    pub enquiry: Enquiry,
    /// Sender summary.
    pub sender: Option<UserSummary>,
    /// Recipient summary.
    pub recipient: Option<UserSummary>,
    /// Listing summary.
    pub property: Option<PropertySummary>,
}
