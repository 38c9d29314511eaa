//! Role gate.
//!
//! Resolves the principal behind a validated `user_id` and checks its role
//! against a required set. Both capability levels share [`authorize`]; they
//! differ only in the roles they accept.

use std::fmt;

use serenity_db::{Principal, Role, UserStore};

use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// `admin` or `super_admin`
    AdminOrAbove,
    /// `super_admin` only
    SuperAdminOnly,
}

impl RoleRequirement {
    pub fn roles(&self) -> &'static [Role] {
        match self {
            RoleRequirement::AdminOrAbove => &[Role::Admin, Role::SuperAdmin],
            RoleRequirement::SuperAdminOnly => &[Role::SuperAdmin],
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleRequirement::AdminOrAbove => "admin_or_above",
            RoleRequirement::SuperAdminOnly => "super_admin_only",
        }
    }
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up `user_id` and admits it if its role satisfies `requirement`.
///
/// # Errors
///
/// - [`AuthError::PrincipalNotFound`] when the store has no such user
/// - [`AuthError::InsufficientRole`] when the role is outside the required set
/// - [`AuthError::InternalLookupFailure`] when the store itself fails
pub async fn authorize<S>(
    store: &S,
    user_id: &str,
    requirement: RoleRequirement,
) -> Result<Principal, AuthError>
where
    S: UserStore + ?Sized,
{
    let principal = store
        .find_by_id(user_id)
        .await
        .map_err(AuthError::InternalLookupFailure)?
        .ok_or(AuthError::PrincipalNotFound)?;

    if !requirement.allows(principal.role) {
        tracing::debug!(
            user_id = %user_id,
            role = %principal.role,
            required = %requirement,
            "Role gate refused principal"
        );
        return Err(AuthError::InsufficientRole);
    }

    Ok(principal)
}
