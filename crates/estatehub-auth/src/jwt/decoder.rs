//! JWT token validation.
//!
//! Expiry is checked against an explicit clock so callers (and tests) can
//! decide what "now" is. Every failure maps to an authentication error.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use estatehub_core::config::AuthConfig;
use estatehub_core::error::AppError;

use super::claims::Claims;

/// Validates HS256 session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature and claim-presence rules.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iat"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate a token against the current time.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode and validate a token as of `now`.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Rejected token");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication("Invalid token"),
                }
            })?
            .claims;

        if claims.is_expired_at(now) {
            return Err(AppError::authentication("Token has expired"));
        }

        Ok(claims)
    }
}
