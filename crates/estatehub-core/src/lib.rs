//! # estatehub-core
//!
//! Core crate for EstateHub. Contains configuration schemas, typed
//! identifiers, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other EstateHub crates.

pub mod config;
pub mod error;
#[cfg(feature = "axum")]
pub mod response;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
