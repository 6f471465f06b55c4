//! Route handlers organized by domain.

pub mod auth;
pub mod enquiry;
pub mod health;
pub mod listing;
pub mod property;
