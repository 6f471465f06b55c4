//! Password policy enforcement for new accounts.

use estatehub_core::config::AuthConfig;
use estatehub_core::error::AppError;

/// Validates new passwords against the configured minimum length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}
