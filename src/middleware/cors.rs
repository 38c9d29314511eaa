//! CORS negotiation.
//!
//! Origins are resolved in order: local-network pattern match (echo), literal
//! allow-list match (echo), otherwise the first allow-list entry. A request
//! without an `Origin` header also gets the first entry. Preflight requests
//! are answered here and never reach the inner router.
//!
//! The local-network patterns are a development convenience, not a security
//! boundary; disable them with `CORS_ALLOW_LOCAL_NETWORK=false`.

use std::sync::LazyLock;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::Response,
};
use regex::Regex;
use serenity_config::CorsConfig;

use crate::metrics::track_cors_preflight;
use crate::state::AppState;

pub const ALLOW_HEADERS: &str = "X-Requested-With, Content-Type, Accept, Origin, Authorization";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, PATCH, OPTIONS";
pub const PREFLIGHT_MAX_AGE_SECS: u32 = 86400;

static LOCAL_NETWORK_ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(localhost|127\.0\.0\.1|192\.168\.\d{1,3}\.\d{1,3}|172\.\d{1,3}\.\d{1,3}\.\d{1,3})(:\d{1,5})?$",
    )
    .expect("local network origin pattern is valid")
});

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    allow_local_network: bool,
}

impl CorsPolicy {
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            allow_local_network: config.allow_local_network,
        }
    }

    /// Picks the value of `Access-Control-Allow-Origin` for a request origin.
    /// `None` only when the allow-list is empty and nothing matched.
    pub fn resolve_origin<'a>(&'a self, origin: Option<&'a str>) -> Option<&'a str> {
        if let Some(origin) = origin {
            if self.allow_local_network && LOCAL_NETWORK_ORIGIN.is_match(origin) {
                return Some(origin);
            }
            if self.allowed_origins.iter().any(|allowed| allowed == origin) {
                return Some(origin);
            }
        }
        self.allowed_origins.first().map(String::as_str)
    }

    fn apply(&self, origin: Option<&str>, headers: &mut HeaderMap) {
        if let Some(allow_origin) = self
            .resolve_origin(origin)
            .and_then(|value| HeaderValue::from_str(value).ok())
        {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        }
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
    }

    pub fn preflight_response(&self, origin: Option<&str>) -> Response {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::OK;
        self.apply(origin, response.headers_mut());
        response.headers_mut().insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from(PREFLIGHT_MAX_AGE_SECS),
        );
        response
    }

    /// Decorates a downstream response, success or rejection alike.
    pub fn decorate(&self, origin: Option<&str>, response: &mut Response) {
        self.apply(origin, response.headers_mut());
    }
}

pub async fn cors_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    if req.method() == Method::OPTIONS {
        track_cors_preflight();
        return state.cors.preflight_response(origin.as_deref());
    }

    let mut response = next.run(req).await;
    state.cors.decorate(origin.as_deref(), &mut response);
    response
}
