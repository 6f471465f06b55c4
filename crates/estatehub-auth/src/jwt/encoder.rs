//! JWT token creation with a configured secret and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use estatehub_core::config::AuthConfig;
use estatehub_core::error::{AppError, ErrorKind};
use estatehub_entity::user::User;

use super::claims::Claims;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly signed token.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    /// The compact JWT.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: config.token_ttl(),
        }
    }

    /// Token lifetime.
    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Issue a token for `user` starting now.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token for `user` as if signed at `issued_at`.
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::configuration("Token lifetime out of range"))?;
        let claims = Claims {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to sign token", e))?;

        Ok(IssuedToken { token, expires_at })
    }
}
