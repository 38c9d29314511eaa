use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human readable reason
    pub message: String,
    /// `Unauthorized` for 401/403, the status reason otherwise
    pub error: String,
    /// Machine readable rejection code, e.g. `expired`
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
