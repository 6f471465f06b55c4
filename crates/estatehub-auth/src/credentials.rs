//! Email/password credential verification.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use estatehub_core::error::AppError;
use estatehub_database::store::UserStore;
use estatehub_entity::user::User;

use crate::password::PasswordHasher;

/// The only message a failed sign-in ever produces.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Hashed once and verified against when the email is unknown.
const DECOY_PASSWORD: &str = "estatehub-decoy-password";

/// Checks an email/password pair against the user store.
///
/// Unknown email, wrong password and missing input are indistinguishable
/// to the caller.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    decoy_hash: OnceLock<String>,
}

impl CredentialVerifier {
    /// Creates a verifier over the given user store.
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            hasher,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Return the user owning these credentials.
    pub async fn verify(&self, email: &str, password: &str) -> Result<User, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let Some(user) = self.users.find_by_email(email).await? else {
            debug!("Sign-in for unknown email");
            self.verify_decoy(password)?;
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Sign-in with wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    /// Spend one Argon2 verification so an unknown email costs as much as
    /// a wrong password.
    fn verify_decoy(&self, password: &str) -> Result<(), AppError> {
        let hash = match self.decoy_hash.get() {
            Some(hash) => hash,
            None => {
                let hash = self.hasher.hash_password(DECOY_PASSWORD)?;
                self.decoy_hash.get_or_init(|| hash)
            }
        };
        self.hasher.verify_password(password, hash)?;
        Ok(())
    }
}
