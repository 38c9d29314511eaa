//! Rejection taxonomy of the gate.

use serenity_core::{AppError, StatusCode};
use serenity_db::StoreError;

/// Why a request was refused.
///
/// Everything except [`AuthError::InsufficientRole`] and
/// [`AuthError::InternalLookupFailure`] is an authentication failure (401).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization token is missing")]
    NoToken,

    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is not an access token")]
    WrongTokenType,

    #[error("Token has expired")]
    Expired,

    #[error("User not found")]
    PrincipalNotFound,

    #[error("Access denied: insufficient role")]
    InsufficientRole,

    #[error("Failed to resolve user")]
    InternalLookupFailure(#[source] StoreError),
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NoToken => "no_token",
            AuthError::Malformed => "malformed",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::WrongTokenType => "wrong_token_type",
            AuthError::Expired => "expired",
            AuthError::PrincipalNotFound => "principal_not_found",
            AuthError::InsufficientRole => "insufficient_role",
            AuthError::InternalLookupFailure(_) => "internal_lookup_failure",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InsufficientRole => StatusCode::FORBIDDEN,
            AuthError::InternalLookupFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let code = err.code();
        match err {
            AuthError::InternalLookupFailure(source) => AppError::internal(code, source),
            other => AppError::new(other.status_code(), code, other.to_string()),
        }
    }
}

/// Failures while building keys or signing tokens.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("unsupported JWT algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("JWT secret must not be empty")]
    EmptySecret,

    #[error("failed to encode token: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failures_map_to_401() {
        for err in [
            AuthError::NoToken,
            AuthError::Malformed,
            AuthError::InvalidSignature,
            AuthError::WrongTokenType,
            AuthError::Expired,
            AuthError::PrincipalNotFound,
        ] {
            let code = err.code();
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
            let app_error = AppError::from(err);
            assert_eq!(app_error.status.as_u16(), 401, "{code}");
            assert_eq!(app_error.code, code);
            assert_eq!(app_error.label(), "Unauthorized");
        }
    }

    #[test]
    fn test_insufficient_role_maps_to_403() {
        let app_error = AppError::from(AuthError::InsufficientRole);
        assert_eq!(app_error.status.as_u16(), 403);
        assert_eq!(app_error.code, "insufficient_role");
    }

    #[test]
    fn test_lookup_failure_maps_to_opaque_500() {
        let store_error = StoreError::Conflict("db exploded at 10.0.0.3".to_string());
        let app_error = AppError::from(AuthError::InternalLookupFailure(store_error));
        assert_eq!(app_error.status.as_u16(), 500);
        assert_eq!(app_error.message, "Internal server error");
        assert!(app_error.source_error().is_some());
    }

    #[test]
    fn test_expired_message_mentions_expiry() {
        assert!(AuthError::Expired.to_string().contains("expired"));
    }
}
