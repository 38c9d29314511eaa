//! # Serenity DB
//!
//! Principal model and the user store the role gate resolves identities
//! against.
//!
//! - [`models`]: [`Role`] and [`Principal`]
//! - [`store`]: the [`UserStore`] trait
//! - [`postgres`]: SQLx-backed store with embedded migrations
//! - [`memory`]: in-process store for development and tests
//!
//! The store is always constructed explicitly and handed to the application
//! state; nothing in this crate keeps a global connection.
//!
//! # Example
//!
//! ```ignore
//! use serenity_db::{init_db_pool, PgUserStore, UserStore};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! let store = PgUserStore::new(pool);
//! let principal = store.find_by_id("u1").await?;
//! ```

pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use memory::InMemoryUserStore;
pub use models::{NewPrincipal, Principal, Role, RoleParseError};
pub use postgres::{MIGRATOR, PgUserStore, init_db_pool, run_migrations};
pub use store::{StoreError, UserStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;
