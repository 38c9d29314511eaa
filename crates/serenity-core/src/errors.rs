//! HTTP-facing application error.
//!
//! Every rejection produced by the gate, and every failure surfaced by the
//! thin controllers behind it, leaves the service as an [`AppError`]. The
//! response body is always the structured envelope
//!
//! ```json
//! {"success": false, "message": "...", "error": "Unauthorized", "code": "no_token"}
//! ```
//!
//! Internal errors keep their cause for server-side logging only; the client
//! sees an opaque message.

use anyhow::Error;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::response::ErrorBody;

const OPAQUE_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    source: Option<Error>,
}

impl AppError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn forbidden(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, code, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable", message)
    }

    /// Wraps an unexpected failure. The cause is logged when the response is
    /// rendered and never reaches the client.
    pub fn internal<E>(code: &'static str, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code,
            message: OPAQUE_INTERNAL_MESSAGE.to_string(),
            source: Some(err.into()),
        }
    }

    pub fn source_error(&self) -> Option<&Error> {
        self.source.as_ref()
    }

    /// The `error` label of the envelope. Authentication and authorization
    /// failures share the `Unauthorized` label.
    pub fn label(&self) -> &'static str {
        match self.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "Unauthorized",
            status => status.canonical_reason().unwrap_or("Error"),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.status, self.code, self.message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    code = self.code,
                    status = self.status.as_u16(),
                    error = ?source,
                    "Request failed with internal error"
                ),
                None => tracing::error!(
                    code = self.code,
                    status = self.status.as_u16(),
                    "Request failed with internal error"
                ),
            }
        }

        let body = ErrorBody {
            success: false,
            message: self.message.clone(),
            error: self.label().to_string(),
            code: self.code.to_string(),
        };

        let mut response = (self.status, Json(body)).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
