//! Property listing entities.

pub mod address;
pub mod features;
pub mod kind;
pub mod model;
pub mod price;
pub mod status;

pub use address::{Address, Province};
pub use features::PropertyFeatures;
pub use kind::PropertyType;
pub use model::{
    CreateProperty, PLACEHOLDER_IMAGE, Property, PropertyChanges, PropertySummary,
    PropertyWithOwner, images_or_placeholder,
};
pub use price::{MAX_PRICE, MIN_PRICE, format_rand, parse_price_text, price_in_range};
pub use status::ListingStatus;
