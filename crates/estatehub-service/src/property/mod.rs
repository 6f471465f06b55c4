//! Listing browsing and owner-guarded listing mutations.

pub mod input;
pub mod service;

pub use input::{AddressInput, FeaturesInput, ImagesInput, PriceInput, PropertyInput};
pub use service::PropertyService;
