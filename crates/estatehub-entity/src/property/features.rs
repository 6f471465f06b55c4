//! Listing features value object, stored as JSONB.

use serde::{Deserialize, Serialize};

/// Maximum number of bedrooms.
pub const MAX_BEDROOMS: u32 = 20;
/// Maximum number of bathrooms.
pub const MAX_BATHROOMS: u32 = 10;
/// Maximum floor area in square metres.
pub const MAX_AREA: f64 = 10_000.0;

/// Physical features of a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFeatures {
    /// Bedroom count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    /// Bathroom count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    /// Floor area in m².
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Has parking.
    #[serde(default)]
    pub parking: bool,
    /// Sold or let furnished.
    #[serde(default)]
    pub furnished: bool,
}
