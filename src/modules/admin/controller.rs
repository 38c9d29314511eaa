use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serenity_core::{AppError, ErrorBody};
use serenity_db::Principal;
use tracing::instrument;

use crate::extract::AppJson;
use crate::modules::admin::model::{PrincipalResponse, RoleChangedResponse, UpdateRoleDto};
use crate::modules::admin::service::AdminService;
use crate::state::AppState;

/// Get the principal resolved by the admin gate
#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Resolved principal", body = PrincipalResponse),
        (status = 401, description = "Unauthorized - missing or invalid token, or unknown user", body = ErrorBody),
        (status = 403, description = "Forbidden - admin role required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip_all, fields(user_id = %principal.id))]
pub async fn get_admin_me(
    Extension(principal): Extension<Principal>,
) -> Result<Json<PrincipalResponse>, AppError> {
    Ok(Json(principal.into()))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/super-admin/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = PrincipalResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden - super admin role required", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Super Admin"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PrincipalResponse>, AppError> {
    let user = AdminService::get_user(state.users.as_ref(), &id).await?;
    Ok(Json(user.into()))
}

/// Change a user's role
#[utoipa::path(
    put,
    path = "/api/super-admin/users/{id}/role",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = RoleChangedResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden - super admin role required", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Unknown role or invalid request body", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Super Admin"
)]
#[instrument(skip(state, actor), fields(changed_by = %actor.id))]
pub async fn update_user_role(
    State(state): State<AppState>,
    Extension(actor): Extension<Principal>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateRoleDto>,
) -> Result<Json<RoleChangedResponse>, AppError> {
    let changed = AdminService::update_role(state.users.as_ref(), &id, &dto.role, &actor.id).await?;
    Ok(Json(changed))
}
