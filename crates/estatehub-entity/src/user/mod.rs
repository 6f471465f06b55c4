//! User domain entities.

pub mod model;
pub mod role;

pub use model::{CreateUser, User, UserSummary, normalize_email};
pub use role::UserRole;
