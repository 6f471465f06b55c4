//! Request DTOs that have no service-level counterpart.

use serde::Deserialize;

/// Sign-in request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// Email address, any case.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}
