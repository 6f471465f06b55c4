//! User account operations: registration and profile.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use estatehub_auth::jwt::IssuedToken;
use estatehub_auth::password::{PasswordHasher, PasswordValidator};
use estatehub_auth::session::SessionManager;
use estatehub_core::error::AppError;
use estatehub_database::store::{DUPLICATE_USER_MESSAGE, UserStore};
use estatehub_entity::user::{CreateUser, User, UserRole, normalize_email};

use crate::context::RequestContext;

/// Registration request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterInput {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// A newly created account and its first token.
#[derive(Debug, Clone)]
pub struct Registration {
    /// The created user.
    pub user: User,
    /// Token for the new session.
    pub token: IssuedToken,
}

/// Handles account operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Token issuance.
    sessions: Arc<SessionManager>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            sessions,
        }
    }

    /// Create an account with role `user` and issue its first token.
    pub async fn register(&self, input: RegisterInput) -> Result<Registration, AppError> {
        let (Some(name), Some(email), Some(password)) = (
            input.name.as_deref().map(str::trim).filter(|s| !s.is_empty()),
            input.email.as_deref().map(str::trim).filter(|s| !s.is_empty()),
            input.password.as_deref().filter(|s| !s.is_empty()),
        ) else {
            return Err(AppError::validation("Please provide all required fields"));
        };

        let email = normalize_email(email);
        if !email.contains('@') {
            return Err(AppError::validation("Please provide a valid email"));
        }
        self.validator.validate(password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation(DUPLICATE_USER_MESSAGE));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email,
                password_hash,
                role: UserRole::User,
            })
            .await?;

        let token = self.sessions.issue_for(&user)?;
        info!(user_id = %user.id, "User registered");

        Ok(Registration { user, token })
    }

    /// Gets the current user's profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
