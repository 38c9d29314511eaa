//! Token issuance.
//!
//! The HTTP surface never issues tokens; these helpers back the admin CLI
//! and the test suites. Tokens carry `user_id`, `type`, `iat`, `exp`, and a
//! `jti` on refresh tokens.
//!
//! # Example
//!
//! ```ignore
//! use serenity_auth::create_access_token;
//! use serenity_config::JwtConfig;
//!
//! let token = create_access_token("u1", &JwtConfig::from_env())?;
//! ```

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serenity_config::JwtConfig;
use uuid::Uuid;

use crate::claims::{TokenClaims, TokenType};
use crate::error::TokenError;
use crate::validator::hmac_algorithm;

/// Creates an access token valid for `jwt_config.access_token_expiry` seconds.
pub fn create_access_token(user_id: &str, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    create_token(
        user_id,
        TokenType::Access,
        jwt_config.access_token_expiry,
        jwt_config,
    )
}

/// Creates a refresh token valid for `jwt_config.refresh_token_expiry` seconds.
pub fn create_refresh_token(user_id: &str, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    create_token(
        user_id,
        TokenType::Refresh,
        jwt_config.refresh_token_expiry,
        jwt_config,
    )
}

/// Creates a token of the given type expiring `ttl_secs` from now. A
/// negative ttl produces an already expired token.
pub fn create_token(
    user_id: &str,
    token_type: TokenType,
    ttl_secs: i64,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    let now = Utc::now().timestamp();
    let mut claims = TokenClaims::new(user_id, token_type, now, now + ttl_secs);
    if token_type == TokenType::Refresh {
        claims.jti = Some(Uuid::new_v4().to_string());
    }
    encode_claims(&claims, jwt_config)
}

pub fn encode_claims(claims: &TokenClaims, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    if jwt_config.secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }
    let algorithm = hmac_algorithm(&jwt_config.algorithm)?;

    Ok(encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )?)
}
