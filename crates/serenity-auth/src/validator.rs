//! Bearer token validation.
//!
//! [`TokenValidator::validate_at`] turns a raw `Authorization` header value
//! into verified claims in four ordered steps:
//!
//! 1. extraction of `Bearer <token>` (scheme matched case-insensitively)
//! 2. signature verification with the server secret and configured algorithm
//! 3. token type check (`type` must be `access`)
//! 4. expiry check (`exp` strictly before now is expired)
//!
//! The order is observable: a forged, expired token reports
//! [`AuthError::InvalidSignature`], and an expired refresh token reports
//! [`AuthError::WrongTokenType`].

use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serenity_config::JwtConfig;

use crate::claims::{TokenClaims, TokenType};
use crate::error::{AuthError, TokenError};

/// Parses a configured algorithm name. Only HMAC algorithms are accepted
/// since tokens are signed with a shared secret.
pub fn hmac_algorithm(name: &str) -> Result<Algorithm, TokenError> {
    match name.trim().to_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(TokenError::UnsupportedAlgorithm(other.to_string())),
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// Missing, empty, non-Bearer and `Bearer` without a value all yield
/// [`AuthError::NoToken`].
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::NoToken)?;

    let (scheme, token) = value
        .split_once(char::is_whitespace)
        .ok_or(AuthError::NoToken)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::NoToken);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::NoToken);
    }

    Ok(token)
}

#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenValidator")
            .field("algorithm", &self.algorithm)
            .field("decoding_key", &"<redacted>")
            .finish()
    }
}

impl TokenValidator {
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        let algorithm = hmac_algorithm(&config.algorithm)?;
        Ok(Self::from_secret(config.secret.as_bytes(), algorithm))
    }

    pub fn from_secret(secret: &[u8], algorithm: Algorithm) -> Self {
        // Claim checks are done by hand after decoding so their order and
        // error mapping stay under our control.
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            algorithm,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Validates a header value against the current wall-clock time.
    pub fn validate(&self, header: Option<&str>) -> Result<TokenClaims, AuthError> {
        self.validate_at(header, Utc::now().timestamp())
    }

    pub fn validate_at(&self, header: Option<&str>, now: i64) -> Result<TokenClaims, AuthError> {
        let token = extract_bearer(header)?;
        self.verify_access_token(token, now)
    }

    /// Steps 2 to 4 on a bare token.
    pub fn verify_access_token(&self, token: &str, now: i64) -> Result<TokenClaims, AuthError> {
        let claims = self.decode(token)?;

        if !claims.is_type(TokenType::Access) {
            return Err(AuthError::WrongTokenType);
        }

        if claims.is_expired_at(now) {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }

    /// Verifies structure and signature only. No type or expiry checks.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        if token.split('.').count() != 3 {
            return Err(AuthError::Malformed);
        }

        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                _ => AuthError::Malformed,
            })
    }
}
