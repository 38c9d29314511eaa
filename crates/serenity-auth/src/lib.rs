//! # Serenity Auth
//!
//! The decision logic of the auth gate, independent of any HTTP framework:
//!
//! - [`claims`]: the token payload and its type marker
//! - [`validator`]: header extraction, signature verification, type and expiry checks
//! - [`gate`]: principal lookup and role-set authorization
//! - [`jwt`]: token issuance for the admin CLI and tests
//! - [`error`]: the rejection taxonomy
//!
//! # Example
//!
//! ```ignore
//! use serenity_auth::{TokenValidator, RoleRequirement, authorize};
//!
//! let validator = TokenValidator::new(&JwtConfig::from_env())?;
//! let claims = validator.validate(Some("Bearer eyJ..."))?;
//! let principal = authorize(&store, &claims.user_id, RoleRequirement::AdminOrAbove).await?;
//! ```

pub mod claims;
pub mod error;
pub mod gate;
pub mod jwt;
pub mod validator;

pub use claims::{TokenClaims, TokenType};
pub use error::{AuthError, TokenError};
pub use gate::{RoleRequirement, authorize};
pub use jwt::{create_access_token, create_refresh_token, create_token};
pub use validator::{TokenValidator, extract_bearer, hmac_algorithm};
