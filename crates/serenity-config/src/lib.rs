//! # Serenity Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token secret, algorithm and issuance lifetimes
//! - [`cors`]: origin allow-list and the local-network pattern toggle
//! - [`database`]: optional Postgres connection settings
//! - [`server`]: bind address
//!
//! # Example
//!
//! ```ignore
//! use serenity_config::{CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

mod env;

pub use cors::CorsConfig;
pub use database::{DEFAULT_MAX_CONNECTIONS, DatabaseConfig};
pub use jwt::JwtConfig;
pub use server::ServerConfig;
