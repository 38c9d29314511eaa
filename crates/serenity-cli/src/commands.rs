use anyhow::{Context, bail};
use serde_json::{Map, Value};
use serenity_auth::{TokenType, TokenValidator, create_token};
use serenity_config::JwtConfig;
use serenity_db::{NewPrincipal, Principal, Role, UserStore};

pub async fn create_user(
    store: &dyn UserStore,
    id: &str,
    email: &str,
    name: Option<&str>,
    role: &str,
) -> anyhow::Result<Principal> {
    let role: Role = role.parse()?;
    let mut new_principal = NewPrincipal::new(id, email).with_role(role);
    if let Some(name) = name {
        new_principal = new_principal.with_name(name);
    }

    store
        .create(new_principal)
        .await
        .context("Failed to create user")
}

pub async fn set_role(store: &dyn UserStore, id: &str, role: &str) -> anyhow::Result<Principal> {
    let role: Role = role.parse()?;
    match store
        .set_role(id, role)
        .await
        .context("Failed to update role")?
    {
        Some(principal) => Ok(principal),
        None => bail!("user {id} not found"),
    }
}

/// Signs a token for `user_id`. `ttl` overrides the configured lifetime of
/// the chosen token type.
pub fn issue_token(
    user_id: &str,
    refresh: bool,
    ttl: Option<i64>,
    jwt_config: &JwtConfig,
) -> anyhow::Result<String> {
    if user_id.is_empty() {
        bail!("user id must not be empty");
    }

    let (token_type, default_ttl) = if refresh {
        (TokenType::Refresh, jwt_config.refresh_token_expiry)
    } else {
        (TokenType::Access, jwt_config.access_token_expiry)
    };

    Ok(create_token(
        user_id,
        token_type,
        ttl.unwrap_or(default_ttl),
        jwt_config,
    )?)
}

/// Outcome of running the access-token checks on a raw token.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    Valid(Map<String, Value>),
    Rejected(&'static str),
}

/// Runs signature, type and expiry checks at `now`. No principal lookup.
pub fn verify_token(token: &str, jwt_config: &JwtConfig, now: i64) -> anyhow::Result<Verification> {
    let validator = TokenValidator::new(jwt_config)?;
    Ok(match validator.verify_access_token(token.trim(), now) {
        Ok(claims) => Verification::Valid(claims.to_payload()),
        Err(err) => Verification::Rejected(err.code()),
    })
}
