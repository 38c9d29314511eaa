//! Token payload structures.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Kind of token, carried in the `type` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded token payload.
///
/// `user_id` and `exp` are mandatory; a payload without them does not
/// deserialize. The `type` marker is kept as a raw string so an unknown
/// marker is reported as a wrong token type rather than as malformed input.
/// Claims this struct does not name are preserved in `extra` and handed to
/// downstream handlers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(deserialize_with = "deserialize_user_id")]
    pub user_id: String,
    /// Expiry, seconds since the Unix epoch
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub exp: i64,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub iat: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenClaims {
    pub fn new(user_id: impl Into<String>, token_type: TokenType, iat: i64, exp: i64) -> Self {
        Self {
            user_id: user_id.into(),
            exp,
            iat: Some(iat),
            token_type: Some(token_type.as_str().to_string()),
            jti: None,
            extra: Map::new(),
        }
    }

    pub fn is_type(&self, token_type: TokenType) -> bool {
        self.token_type.as_deref() == Some(token_type.as_str())
    }

    /// Expired when `exp` is strictly before `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }

    /// The whole payload as a JSON object, including unrecognised claims.
    pub fn to_payload(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Accepts a non-empty string or an integer id and normalises it to a string.
fn deserialize_user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    let id = match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    };

    if id.trim().is_empty() {
        return Err(serde::de::Error::custom("user_id must not be empty"));
    }
    Ok(id)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl RawTimestamp {
    /// Whole seconds; fractional timestamps are truncated.
    fn into_seconds<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            RawTimestamp::Signed(n) => Ok(n),
            RawTimestamp::Unsigned(n) => {
                i64::try_from(n).map_err(|_| E::custom("timestamp out of range"))
            }
            RawTimestamp::Float(f) if f.is_finite() && f.abs() < i64::MAX as f64 => {
                Ok(f.trunc() as i64)
            }
            RawTimestamp::Float(_) => Err(E::custom("timestamp must be a finite number")),
        }
    }
}

/// NumericDate: integer or fractional seconds since the Unix epoch.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?.into_seconds()
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawTimestamp>::deserialize(deserializer)?
        .map(RawTimestamp::into_seconds)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_payload() {
        let json = r#"{"user_id":"u1","exp":1700000000,"type":"access"}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.user_id, "u1");
        assert_eq!(claims.exp, 1700000000);
        assert!(claims.is_type(TokenType::Access));
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn test_numeric_user_id_is_normalised() {
        let json = r#"{"user_id":42,"exp":1700000000,"type":"access"}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.user_id, "42");
    }

    #[test]
    fn test_missing_user_id_fails() {
        let json = r#"{"exp":1700000000,"type":"access"}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());
    }

    #[test]
    fn test_empty_user_id_fails() {
        let json = r#"{"user_id":"  ","exp":1700000000,"type":"access"}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());
    }

    #[test]
    fn test_missing_exp_fails() {
        let json = r#"{"user_id":"u1","type":"access"}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());
    }

    #[test]
    fn test_fractional_exp_is_truncated() {
        let json = r#"{"user_id":"u1","exp":1700000000.0,"iat":1699990000.75,"type":"access"}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.exp, 1700000000);
        assert_eq!(claims.iat, Some(1699990000));
    }

    #[test]
    fn test_non_numeric_exp_fails() {
        let json = r#"{"user_id":"u1","exp":"1700000000","type":"access"}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());

        let json = r#"{"user_id":"u1","exp":1e400,"type":"access"}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());
    }

    #[test]
    fn test_exp_beyond_i64_fails() {
        let json = r#"{"user_id":"u1","exp":18446744073709551615,"type":"access"}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());
    }

    #[test]
    fn test_missing_type_is_not_access() {
        let json = r#"{"user_id":"u1","exp":1700000000}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert!(claims.token_type.is_none());
        assert!(!claims.is_type(TokenType::Access));
    }

    #[test]
    fn test_extra_claims_survive_into_payload() {
        let json = r#"{"user_id":"u1","exp":1700000000,"type":"access","email":"u1@serenity.io","iat":1699990000}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.iat, Some(1699990000));

        let payload = claims.to_payload();
        assert_eq!(payload["user_id"], "u1");
        assert_eq!(payload["type"], "access");
        assert_eq!(payload["email"], "u1@serenity.io");
        assert_eq!(payload["iat"], 1699990000);
    }

    #[test]
    fn test_expiry_is_strict() {
        let claims = TokenClaims::new("u1", TokenType::Access, 100, 200);
        assert!(!claims.is_expired_at(199));
        assert!(!claims.is_expired_at(200));
        assert!(claims.is_expired_at(201));
    }

    #[test]
    fn test_token_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TokenType::Refresh).unwrap(), r#""refresh""#);
        assert_eq!(TokenType::Access.to_string(), "access");
    }
}
