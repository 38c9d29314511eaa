//! The auth gate as Axum middleware.
//!
//! - [`auth`]: bearer token validation, [`auth::AuthContext`] and the [`auth::AuthUser`] extractor
//! - [`role`]: role-set gates layered on top of authentication
//! - [`cors`]: origin negotiation and preflight short-circuit
//!
//! # Request flow
//!
//! 1. `cors_middleware` answers `OPTIONS` directly; other requests continue
//! 2. `require_auth` (or a role gate) validates `Authorization: Bearer <token>`
//!    and stores `user_id` and `token_payload` in the request extensions
//! 3. Role gates resolve the principal and check its role
//! 4. The handler runs; CORS headers are added to whatever it returns
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_me(auth_user: AuthUser) -> impl IntoResponse {
//!     Json(auth_user.user_id().to_string())
//! }
//! ```

pub mod auth;
pub mod cors;
pub mod role;
