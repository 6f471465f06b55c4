//! # estatehub-service
//!
//! Business logic service layer for EstateHub. Each service orchestrates
//! the stores and the auth components to implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod enquiry;
pub mod property;
pub mod user;
pub mod validation;

pub use context::RequestContext;
pub use enquiry::{EnquiryInput, EnquiryService, StatusInput};
pub use property::{PropertyInput, PropertyService};
pub use user::{Registration, RegisterInput, UserService};
