//! # estatehub-database
//!
//! Persistence for EstateHub: the store traits used by the service layer,
//! their PostgreSQL repositories, and an in-memory implementation for
//! tests and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryDatabase;
pub use store::{EnquiryStore, PropertyStore, Stores, UserStore};
