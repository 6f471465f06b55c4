//! Account registration and profile lookups.

pub mod service;

pub use service::{Registration, RegisterInput, UserService};
