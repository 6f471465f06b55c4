//! Listing request bodies.
//!
//! Every field is optional at the wire level; required-field rules differ
//! between create and update and are enforced by the service. Fields not
//! named here are ignored, which keeps `owner` and timestamps out of reach.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use estatehub_core::error::AppError;
use estatehub_entity::property::{
    Address, PropertyFeatures, Province, images_or_placeholder, parse_price_text, price_in_range,
};
use estatehub_entity::property::address::{DEFAULT_COUNTRY, is_postal_code};

use crate::validation::rule;

/// Message for a price outside the accepted range.
pub const PRICE_RANGE_MESSAGE: &str = "Price must be between R100,000 and R500,000,000";

/// Create or update body for a listing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    #[validate(length(max = 100, message = "Title cannot be more than 100 characters"))]
    pub title: Option<String>,
    #[validate(length(
        max = 1000,
        message = "Description cannot be more than 1000 characters"
    ))]
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub location: Option<String>,
    #[validate(nested)]
    pub address: Option<AddressInput>,
    pub property_type: Option<String>,
    #[validate(nested)]
    pub features: Option<FeaturesInput>,
    pub status: Option<String>,
    pub images: Option<ImagesInput>,
}

/// A price sent either as a JSON number or as text such as `"R 1,250,000"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Whether the value counts as absent.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// The numeric price, checked against the accepted range.
    pub fn to_price(&self) -> Result<f64, AppError> {
        let price = match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_price_text(text)
                .ok_or_else(|| AppError::validation("Price must be a number"))?,
        };
        if !price_in_range(price) {
            return Err(AppError::validation(PRICE_RANGE_MESSAGE));
        }
        Ok(price)
    }
}

/// Image list as sent by the client. Anything that is not a list of
/// strings is treated like an empty list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImagesInput {
    List(Vec<String>),
    Other(serde_json::Value),
}

impl ImagesInput {
    /// Stored image list; never empty.
    pub fn into_images(self) -> Vec<String> {
        match self {
            Self::List(urls) => images_or_placeholder(
                urls.into_iter()
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty())
                    .collect(),
            ),
            Self::Other(_) => images_or_placeholder(Vec::new()),
        }
    }
}

/// Address body. Accepts `state` for `province` and `zipCode` for
/// `postalCode`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub street: Option<String>,
    pub city: Option<String>,
    #[serde(alias = "state")]
    pub province: Option<String>,
    #[serde(alias = "zipCode")]
    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

fn validate_postal_code(code: &str) -> Result<(), ValidationError> {
    if is_postal_code(code.trim()) {
        Ok(())
    } else {
        Err(rule(
            "postal_code",
            "Please provide a valid 4-digit South African postal code",
        ))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AddressInput {
    /// Convert into a stored address, enforcing city and province.
    pub fn into_address(self) -> Result<Address, AppError> {
        let city =
            non_blank(self.city).ok_or_else(|| AppError::validation("Please provide city"))?;
        let province: Province = non_blank(self.province)
            .ok_or_else(|| AppError::validation("Please provide province/state"))?
            .parse()?;

        Ok(Address {
            street: non_blank(self.street),
            city,
            province,
            postal_code: non_blank(self.postal_code),
            country: non_blank(self.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        })
    }
}

/// Features body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesInput {
    #[validate(range(min = 0, max = 20, message = "Bedrooms must be between 0 and 20"))]
    pub bedrooms: Option<i64>,
    #[validate(range(min = 0, max = 10, message = "Bathrooms must be between 0 and 10"))]
    pub bathrooms: Option<i64>,
    #[validate(range(min = 0.0, max = 10000.0, message = "Area must be between 0 and 10000 m²"))]
    pub area: Option<f64>,
    pub parking: Option<bool>,
    pub furnished: Option<bool>,
}

impl FeaturesInput {
    /// Convert into stored features. Call after validation.
    pub fn into_features(self) -> PropertyFeatures {
        PropertyFeatures {
            bedrooms: self.bedrooms.and_then(|n| u32::try_from(n).ok()),
            bathrooms: self.bathrooms.and_then(|n| u32::try_from(n).ok()),
            area: self.area,
            parking: self.parking.unwrap_or(false),
            furnished: self.furnished.unwrap_or(false),
        }
    }
}
