//! Role-based authorization middleware for Axum.
//!
//! Two entry points, [`require_admin`] and [`require_super_admin`], share
//! [`require_roles`] and differ only in the accepted role set. On success the
//! resolved [`Principal`] joins the [`AuthContext`] in the request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serenity_auth::{RoleRequirement, authorize};
use serenity_core::AppError;
use serenity_db::Principal;
use tracing::instrument;

use crate::metrics::{track_auth_rejection, track_authorization_check};
use crate::middleware::auth::{AuthContext, authenticate};
use crate::state::AppState;

/// Validates the token (unless an earlier layer already did), resolves the
/// principal and checks it against `requirement`.
#[instrument(skip_all, name = "middleware.role", fields(required = %requirement))]
pub async fn require_roles(
    state: AppState,
    mut req: Request,
    next: Next,
    requirement: RoleRequirement,
) -> Result<Response, AppError> {
    let context = match req.extensions().get::<AuthContext>() {
        Some(context) => context.clone(),
        None => {
            let context = authenticate(&state, req.headers())?;
            req.extensions_mut().insert(context.clone());
            context
        }
    };

    let principal: Principal = authorize(state.users.as_ref(), &context.user_id, requirement)
        .await
        .inspect_err(|err| {
            track_auth_rejection(err.code());
            track_authorization_check(false, requirement.as_str());
        })?;

    track_authorization_check(true, requirement.as_str());
    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

/// Admin-or-above routes (`admin`, `super_admin`).
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/me", get(get_admin_me))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(state, req, next, RoleRequirement::AdminOrAbove).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Super-admin-only routes.
pub async fn require_super_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(state, req, next, RoleRequirement::SuperAdminOnly).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
