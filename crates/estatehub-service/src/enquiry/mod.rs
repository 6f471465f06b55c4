//! Enquiries between prospective buyers and listing owners.

pub mod service;

pub use service::{EnquiryInput, EnquiryService, StatusInput};
