use std::sync::Arc;

use anyhow::Context;
use serenity_config::{CorsConfig, DatabaseConfig, JwtConfig};
use serenity_db::{InMemoryUserStore, PgUserStore, UserStore, init_db_pool, run_migrations};
use tracing::{info, warn};

use crate::state::AppState;

/// Picks the user store: Postgres (migrated on startup) when `DATABASE_URL`
/// is set, otherwise an empty in-memory store.
pub async fn init_user_store(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn UserStore>> {
    if config.url.is_none() {
        warn!("DATABASE_URL not set, using an in-memory user store");
        return Ok(Arc::new(InMemoryUserStore::new()));
    }

    let pool = init_db_pool(config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!(max_connections = config.max_connections, "Connected to Postgres user store");

    Ok(Arc::new(PgUserStore::new(pool)))
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let users = init_user_store(&DatabaseConfig::from_env()).await?;
    AppState::new(users, &JwtConfig::from_env(), &CorsConfig::from_env())
        .context("Invalid JWT configuration")
}
