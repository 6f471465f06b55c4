//! Ownership checks applied before every listing mutation.

use estatehub_core::config::AuthConfig;
use estatehub_core::error::AppError;
use estatehub_core::types::UserId;
use estatehub_entity::property::{Property, PropertyWithOwner};
use estatehub_entity::user::UserRole;

use crate::jwt::Claims;

/// A resource with a single owning user.
pub trait Owned {
    /// The canonical owner id.
    fn owner_id(&self) -> UserId;
}

impl Owned for Property {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

impl Owned for PropertyWithOwner {
    fn owner_id(&self) -> UserId {
        self.property.owner_id
    }
}

/// The authenticated identity making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// User id from the token.
    pub user_id: UserId,
    /// Role from the token.
    pub role: UserRole,
}

impl From<&Claims> for Caller {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

/// What the caller wants to do with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipAction {
    /// Edit a listing.
    Modify,
    /// Delete a listing.
    Delete,
    /// Change the status of an enquiry about a listing.
    ManageEnquiries,
}

impl OwnershipAction {
    fn denied_message(self) -> &'static str {
        match self {
            Self::Modify => "Not authorized",
            Self::Delete => "Not authorized to delete this property",
            Self::ManageEnquiries => "Unauthorized: Not the property owner",
        }
    }
}

/// Decides whether a caller may act on an owned resource.
///
/// Owners may do anything. Admins may always delete, and may modify only
/// when `auth.admin_can_modify_listings` is set. Enquiry management is
/// reserved to the owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipGuard {
    admin_can_modify: bool,
}

impl OwnershipGuard {
    /// Creates a guard from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            admin_can_modify: config.admin_can_modify_listings,
        }
    }

    /// Allow or deny `action` on `resource` for `caller`.
    pub fn check(
        &self,
        resource: &impl Owned,
        caller: &Caller,
        action: OwnershipAction,
    ) -> Result<(), AppError> {
        if resource.owner_id() == caller.user_id {
            return Ok(());
        }

        let admin_bypass = caller.role.is_admin()
            && match action {
                OwnershipAction::Delete => true,
                OwnershipAction::Modify => self.admin_can_modify,
                OwnershipAction::ManageEnquiries => false,
            };

        if admin_bypass {
            Ok(())
        } else {
            Err(AppError::authorization(action.denied_message()))
        }
    }
}
