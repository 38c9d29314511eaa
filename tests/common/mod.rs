#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use serenity::router::init_router;
use serenity::state::AppState;
use serenity_config::{CorsConfig, JwtConfig};
use serenity_db::{
    InMemoryUserStore, NewPrincipal, Principal, Role, RoleParseError, StoreError, UserStore,
};

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        algorithm: "HS256".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604800,
    }
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Seeds `member` (user), `admin` (admin) and `root` (super_admin).
pub async fn seeded_store() -> Arc<InMemoryUserStore> {
    let store = InMemoryUserStore::with_principals([
        NewPrincipal::new("member", "member@serenity.io"),
        NewPrincipal::new("admin", "admin@serenity.io").with_role(Role::Admin),
        NewPrincipal::new("root", "root@serenity.io").with_role(Role::SuperAdmin),
    ])
    .await
    .unwrap();
    Arc::new(store)
}

pub fn test_state(users: Arc<dyn UserStore>) -> AppState {
    AppState::new(users, &jwt_config(), &CorsConfig::default()).unwrap()
}

pub async fn setup_test_app() -> (Router, Arc<InMemoryUserStore>) {
    let store = seeded_store().await;
    let app = init_router(test_state(store.clone()), None);
    (app, store)
}

/// Signs an arbitrary payload with `secret`.
pub fn sign(payload: &Value, secret: &str) -> String {
    encode(
        &Header::default(),
        payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn access_token(user_id: &str) -> String {
    serenity_auth::create_access_token(user_id, &jwt_config()).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Store whose every lookup fails, for the 500 path.
pub struct BrokenStore;

#[async_trait]
impl UserStore for BrokenStore {
    async fn find_by_id(&self, _user_id: &str) -> Result<Option<Principal>, StoreError> {
        Err(StoreError::InvalidRole(RoleParseError(
            "corrupted row from 10.0.0.7".to_string(),
        )))
    }

    async fn create(&self, new_principal: NewPrincipal) -> Result<Principal, StoreError> {
        Err(StoreError::Conflict(new_principal.id))
    }

    async fn set_role(&self, _user_id: &str, _role: Role) -> Result<Option<Principal>, StoreError> {
        Ok(None)
    }
}
