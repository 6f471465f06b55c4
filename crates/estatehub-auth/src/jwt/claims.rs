//! JWT claims structure carried by every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use estatehub_core::types::UserId;
use estatehub_entity::user::UserRole;

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// The authenticated user.
    pub user_id: UserId,
    /// Email at the time of issuance.
    pub email: String,
    /// Role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds at `now` (0 if expired).
    pub fn remaining_ttl_seconds(&self, now: DateTime<Utc>) -> u64 {
        let remaining = self.exp - now.timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
