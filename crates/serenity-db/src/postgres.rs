//! Postgres-backed [`UserStore`].
//!
//! Queries are built at runtime with `sqlx::query_as` so the crate compiles
//! without a live database. The schema lives in `migrations/` and is embedded
//! into [`MIGRATOR`].

use async_trait::async_trait;
use serenity_config::DatabaseConfig;
use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::instrument;

use crate::models::{NewPrincipal, Principal, PrincipalRow, Role};
use crate::store::{StoreError, UserStore};

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Initializes a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is unset or the connection cannot be
/// established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    PgPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .connect(url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_insert_error(err: sqlx::Error, id: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Conflict(id.to_string())
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self), fields(db.system = "postgresql", db.sql.table = "users"))]
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Principal>, StoreError> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            SELECT id, email, name, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Principal::try_from).transpose()?)
    }

    #[instrument(skip(self, new_principal), fields(user_id = %new_principal.id))]
    async fn create(&self, new_principal: NewPrincipal) -> Result<Principal, StoreError> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            INSERT INTO users (id, email, name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, role, created_at, updated_at
            "#,
        )
        .bind(&new_principal.id)
        .bind(&new_principal.email)
        .bind(&new_principal.name)
        .bind(new_principal.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &new_principal.id))?;

        Ok(Principal::try_from(row)?)
    }

    #[instrument(skip(self))]
    async fn set_role(&self, user_id: &str, role: Role) -> Result<Option<Principal>, StoreError> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            UPDATE users
            SET role = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, name, role, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Principal::try_from).transpose()?)
    }
}
