use std::sync::Arc;

use serenity_auth::{TokenError, TokenValidator};
use serenity_config::{CorsConfig, JwtConfig};
use serenity_db::UserStore;

use crate::middleware::cors::CorsPolicy;

/// Shared, immutable per-process state. Every collaborator is constructed
/// explicitly and injected here; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub validator: Arc<TokenValidator>,
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        jwt_config: &JwtConfig,
        cors_config: &CorsConfig,
    ) -> Result<Self, TokenError> {
        Ok(Self {
            users,
            validator: Arc::new(TokenValidator::new(jwt_config)?),
            cors: Arc::new(CorsPolicy::new(cors_config)),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("validator", &self.validator)
            .field("cors", &self.cors)
            .finish_non_exhaustive()
    }
}
