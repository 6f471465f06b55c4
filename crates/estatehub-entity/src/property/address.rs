//! Street address value object, stored as JSONB.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default country for every address.
pub const DEFAULT_COUNTRY: &str = "South Africa";

/// South African provinces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "Eastern Cape")]
    EasternCape,
    #[serde(rename = "Free State")]
    FreeState,
    Gauteng,
    #[serde(rename = "KwaZulu-Natal")]
    KwaZuluNatal,
    Limpopo,
    Mpumalanga,
    #[serde(rename = "Northern Cape")]
    NorthernCape,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "Western Cape")]
    WesternCape,
}

impl Province {
    /// All nine provinces.
    pub const ALL: [Self; 9] = [
        Self::EasternCape,
        Self::FreeState,
        Self::Gauteng,
        Self::KwaZuluNatal,
        Self::Limpopo,
        Self::Mpumalanga,
        Self::NorthernCape,
        Self::NorthWest,
        Self::WesternCape,
    ];

    /// Return the official name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EasternCape => "Eastern Cape",
            Self::FreeState => "Free State",
            Self::Gauteng => "Gauteng",
            Self::KwaZuluNatal => "KwaZulu-Natal",
            Self::Limpopo => "Limpopo",
            Self::Mpumalanga => "Mpumalanga",
            Self::NorthernCape => "Northern Cape",
            Self::NorthWest => "North West",
            Self::WesternCape => "Western Cape",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Province {
    type Err = estatehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| estatehub_core::AppError::validation("Invalid province"))
    }
}

/// Postal address of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City or town.
    pub city: String,
    /// Province.
    pub province: Province,
    /// Four-digit postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country.
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// Whether `code` is a South African postal code (exactly four digits).
pub fn is_postal_code(code: &str) -> bool {
    code.len() == 4 && code.bytes().all(|b| b.is_ascii_digit())
}
