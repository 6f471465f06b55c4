//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum accepted length of the token signing secret, in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Longest accepted token lifetime, in days.
pub const MAX_TOKEN_TTL_DAYS: u32 = 365;

/// Secrets that ship in sample configs and must never sign real tokens.
const PLACEHOLDER_SECRETS: &[&str] = &["fallback_secret", "CHANGE_ME_IN_PRODUCTION", "changeme"];

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Required, no default.
    pub jwt_secret: String,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u32,
    /// Name of the session cookie carrying the token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the session cookie `Secure`.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Let admins update listings they do not own. Admins may always delete.
    #[serde(default)]
    pub admin_can_modify_listings: bool,
}

impl AuthConfig {
    /// Defaults for every field around the given signing secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_ttl_days: default_token_ttl_days(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_min_length: default_password_min(),
            admin_can_modify_listings: false,
        }
    }

    /// Fail fast on a missing, short, or placeholder signing secret.
    pub fn validate(&self) -> Result<(), AppError> {
        let secret = self.jwt_secret.trim();
        if secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must be set"));
        }
        if PLACEHOLDER_SECRETS
            .iter()
            .any(|p| p.eq_ignore_ascii_case(secret))
        {
            return Err(AppError::configuration(
                "auth.jwt_secret is a placeholder value",
            ));
        }
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }
        if !(1..=MAX_TOKEN_TTL_DAYS).contains(&self.token_ttl_days) {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_days must be between 1 and {MAX_TOKEN_TTL_DAYS}"
            )));
        }
        Ok(())
    }

    /// Token lifetime as a chrono duration.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.token_ttl_days))
    }
}

fn default_token_ttl_days() -> u32 {
    30
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_password_min() -> usize {
    6
}
