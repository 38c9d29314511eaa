use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Identity the gate attached to the current request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeResponse {
    pub success: bool,
    pub user_id: String,
    /// Every claim of the presented access token, verbatim
    #[schema(value_type = Object)]
    pub token_payload: Map<String, Value>,
}
