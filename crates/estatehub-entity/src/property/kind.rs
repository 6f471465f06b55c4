//! Property type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of dwelling or premises a listing describes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "property_type")]
pub enum PropertyType {
    /// Free-standing house.
    #[default]
    House,
    /// Apartment or flat.
    Apartment,
    /// Townhouse.
    Townhouse,
    /// Cluster home.
    Cluster,
    /// Duplex.
    Duplex,
    /// Simplex.
    Simplex,
    /// Farm or smallholding.
    Farm,
    /// Commercial premises.
    Commercial,
    /// Industrial premises.
    Industrial,
}

impl PropertyType {
    /// Every accepted property type, in display order.
    pub const ALL: [Self; 9] = [
        Self::House,
        Self::Apartment,
        Self::Townhouse,
        Self::Cluster,
        Self::Duplex,
        Self::Simplex,
        Self::Farm,
        Self::Commercial,
        Self::Industrial,
    ];

    /// Return the canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Townhouse => "Townhouse",
            Self::Cluster => "Cluster",
            Self::Duplex => "Duplex",
            Self::Simplex => "Simplex",
            Self::Farm => "Farm",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = estatehub_core::AppError;

    /// Labels are matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| estatehub_core::AppError::validation("Invalid property type"))
    }
}
