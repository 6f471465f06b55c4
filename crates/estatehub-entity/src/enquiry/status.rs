//! Enquiry status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Follow-up state of an enquiry, managed by the listing owner.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "enquiry_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    /// Newly received.
    #[default]
    Pending,
    /// The owner has replied.
    Contacted,
    /// Closed successfully.
    Resolved,
    /// Hidden from the inbox.
    Archived,
}

impl EnquiryStatus {
    /// Every valid status.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Contacted,
        Self::Resolved,
        Self::Archived,
    ];

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Resolved => "resolved",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EnquiryStatus {
    type Err = estatehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| estatehub_core::AppError::validation("Invalid status"))
    }
}
