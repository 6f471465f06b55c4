//! # estatehub-auth
//!
//! Authentication and authorization for EstateHub.
//!
//! ## Modules
//!
//! - `credentials`: email/password verification against the user store
//! - `jwt`: HS256 token issuance and fail-closed verification
//! - `password`: Argon2id hashing and the minimum-length policy
//! - `session`: login and token flows used by the HTTP layer
//! - `ownership`: per-request owner and admin checks on listings

pub mod credentials;
pub mod jwt;
pub mod ownership;
pub mod password;
pub mod session;

pub use credentials::CredentialVerifier;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use ownership::{Caller, Owned, OwnershipAction, OwnershipGuard};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{LoginResult, SessionManager};
