use crate::env::parse_or;

pub const DEFAULT_ALGORITHM: &str = "HS256";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Name of the HMAC algorithm tokens must be signed with (HS256, HS384, HS512)
    pub algorithm: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-change-in-production".to_string(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            access_token_expiry: 3600,    // 1 hour
            refresh_token_expiry: 604800, // 7 days
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            algorithm: std::env::var("JWT_ALGORITHM")
                .map(|v| v.trim().to_uppercase())
                .unwrap_or(defaults.algorithm),
            access_token_expiry: parse_or("JWT_ACCESS_EXPIRY", defaults.access_token_expiry),
            refresh_token_expiry: parse_or("JWT_REFRESH_EXPIRY", defaults.refresh_token_expiry),
        }
    }
}
