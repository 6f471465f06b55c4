//! Listing status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market status of a listing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "listing_status")]
pub enum ListingStatus {
    /// Available to buy.
    #[default]
    #[serde(rename = "For Sale")]
    #[sqlx(rename = "For Sale")]
    ForSale,
    /// Sold; kept for history.
    Sold,
    /// Available to rent.
    #[serde(rename = "For Rent")]
    #[sqlx(rename = "For Rent")]
    ForRent,
    /// Under offer.
    Pending,
}

impl ListingStatus {
    /// Every listing status.
    pub const ALL: [Self; 4] = [Self::ForSale, Self::Sold, Self::ForRent, Self::Pending];

    /// Return the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::Sold => "Sold",
            Self::ForRent => "For Rent",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = estatehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| estatehub_core::AppError::validation("Invalid listing status"))
    }
}
