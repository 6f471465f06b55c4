//! Session manager: login, token issuance and token verification.
//!
//! Sessions are stateless. The signed token is the session; there is no
//! server-side record to revoke.

use std::sync::Arc;

use tracing::info;

use estatehub_core::error::AppError;
use estatehub_entity::user::User;

use crate::credentials::CredentialVerifier;
use crate::jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// The issued token.
    pub token: IssuedToken,
}

/// Ties credential verification to token issuance.
#[derive(Debug, Clone)]
pub struct SessionManager {
    verifier: Arc<CredentialVerifier>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        verifier: Arc<CredentialVerifier>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            verifier,
            encoder,
            decoder,
        }
    }

    /// Verify credentials and issue a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self.verifier.verify(email, password).await?;
        let token = self.encoder.issue(&user)?;
        info!(user_id = %user.id, "User logged in");
        Ok(LoginResult { user, token })
    }

    /// Issue a token for an already verified user (after registration).
    pub fn issue_for(&self, user: &User) -> Result<IssuedToken, AppError> {
        self.encoder.issue(user)
    }

    /// Verify a presented token.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        self.decoder.decode(token)
    }

    /// Lifetime of issued tokens.
    pub fn token_ttl(&self) -> chrono::Duration {
        self.encoder.ttl()
    }
}
