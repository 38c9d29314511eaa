//! # Serenity CLI
//!
//! Administrative commands for the auth gate: principal management against
//! any [`UserStore`](serenity_db::UserStore), plus token issuance and
//! offline verification for development.
//!
//! ## Usage
//!
//! ```ignore
//! use serenity_cli::commands;
//!
//! let token = commands::issue_token("u1", false, None, &JwtConfig::from_env())?;
//! let report = commands::verify_token(&token, &JwtConfig::from_env(), Utc::now().timestamp());
//! ```

pub mod commands;
