//! Identity resolved from a verified session token.

use serde::Serialize;

use crate::domain::user::UserRole;

/// Principal attached to a request after token verification. Carries only
/// what the visibility rules need.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
