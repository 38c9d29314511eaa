//! Administrative DTOs.

use serde::{Deserialize, Serialize};
use serenity_db::{Principal, Role};
use utoipa::ToSchema;

/// Request body of the role mutation. The role arrives as a plain string so
/// an unknown value can be answered with 422 instead of a framework error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    #[schema(example = "admin")]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrincipalResponse {
    pub success: bool,
    pub user: Principal,
}

impl From<Principal> for PrincipalResponse {
    fn from(user: Principal) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleChangedResponse {
    pub success: bool,
    pub previous_role: Role,
    pub user: Principal,
}
