//! # estatehub-entity
//!
//! Domain entity models for EstateHub. Every struct in this crate
//! represents a database table row or a domain value object. Row types
//! derive `sqlx::FromRow`; all of them serialize with camelCase keys, the
//! shape the web client consumes.

pub mod enquiry;
pub mod property;
pub mod user;
