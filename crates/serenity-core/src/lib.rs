//! # Serenity Core
//!
//! Foundational types shared by every Serenity crate:
//!
//! - [`errors`]: [`AppError`], the HTTP-facing error with the JSON rejection envelope
//! - [`response`]: success envelope and the documented error body schema
//!
//! # Example
//!
//! ```ignore
//! use serenity_core::AppError;
//!
//! let err = AppError::unauthorized("no_token", "Authorization token is missing");
//! ```

pub mod errors;
pub mod response;

pub use errors::AppError;
pub use response::{ErrorBody, HealthResponse};

// Re-export StatusCode so framework-free crates can name statuses
pub use axum::http::StatusCode;
