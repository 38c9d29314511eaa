use axum::Json;
use serenity_core::{AppError, ErrorBody};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::session::model::MeResponse;

/// Get the identity attached by the auth gate
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Authenticated identity", body = MeResponse),
        (status = 401, description = "Unauthorized - missing, invalid or expired token", body = ErrorBody),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Session"
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_me(auth_user: AuthUser) -> Result<Json<MeResponse>, AppError> {
    let AuthUser(context) = auth_user;
    Ok(Json(MeResponse {
        success: true,
        user_id: context.user_id,
        token_payload: context.token_payload,
    }))
}
