use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};
use serenity_auth::{AuthError, TokenClaims};
use serenity_core::AppError;
use tracing::instrument;

use crate::metrics::{track_auth_rejection, track_jwt_validation};
use crate::state::AppState;

/// Identity attached to a request once its access token has been verified.
/// Lives in the request extensions for the lifetime of that request only.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub user_id: String,
    pub token_payload: Map<String, Value>,
}

impl From<TokenClaims> for AuthContext {
    fn from(claims: TokenClaims) -> Self {
        Self {
            token_payload: claims.to_payload(),
            user_id: claims.user_id,
        }
    }
}

fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Runs the token validator against the request headers and records the
/// outcome.
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthContext, AuthError> {
    match state.validator.validate(authorization_header(headers)) {
        Ok(claims) => {
            track_jwt_validation(true);
            Ok(AuthContext::from(claims))
        }
        Err(err) => {
            track_jwt_validation(false);
            track_auth_rejection(err.code());
            tracing::debug!(code = err.code(), "Rejected bearer token");
            Err(err)
        }
    }
}

/// Middleware for routes that need any authenticated user.
///
/// ```rust,ignore
/// Router::new()
///     .route("/me", get(get_me))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
#[instrument(skip_all, name = "middleware.auth")]
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let context = authenticate(&state, req.headers())?;
    req.extensions_mut().insert(context);
    Ok(next.run(req).await)
}

/// Extractor handing the verified identity to a handler. Reuses the context
/// left by [`require_auth`] and validates the header itself otherwise.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl AuthUser {
    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }

    pub fn token_payload(&self) -> &Map<String, Value> {
        &self.0.token_payload
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(context) = parts.extensions.get::<AuthContext>() {
            return Ok(AuthUser(context.clone()));
        }

        let context = authenticate(state, &parts.headers)?;
        parts.extensions.insert(context.clone());
        Ok(AuthUser(context))
    }
}
