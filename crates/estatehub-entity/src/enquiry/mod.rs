//! Enquiry entities.

pub mod model;
pub mod status;

pub use model::{CreateEnquiry, Enquiry, EnquiryDetails};
pub use status::EnquiryStatus;
