//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::Serialize;

use estatehub_auth::jwt::Claims;
use estatehub_auth::ownership::Caller;
use estatehub_core::types::UserId;
use estatehub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from verified token claims by the HTTP layer and passed into
/// service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Email from the token.
    pub email: String,
    /// Role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The identity checked by the ownership guard.
    pub fn caller(&self) -> Caller {
        Caller {
            user_id: self.user_id,
            role: self.role,
        }
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self::new(claims.user_id, claims.email, claims.role)
    }
}
