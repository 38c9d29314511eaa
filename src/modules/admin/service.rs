use anyhow::Context;
use serenity_core::AppError;
use serenity_db::{Principal, Role, RoleParseError, UserStore};
use tracing::{info, instrument};

use crate::modules::admin::model::RoleChangedResponse;

pub struct AdminService;

impl AdminService {
    #[instrument(skip(store))]
    pub async fn get_user(store: &dyn UserStore, user_id: &str) -> Result<Principal, AppError> {
        store
            .find_by_id(user_id)
            .await
            .context("Failed to fetch user")
            .map_err(|e| AppError::internal("store_error", e))?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// The only operation that mutates a principal's role.
    #[instrument(skip(store))]
    pub async fn update_role(
        store: &dyn UserStore,
        user_id: &str,
        raw_role: &str,
        changed_by: &str,
    ) -> Result<RoleChangedResponse, AppError> {
        let role: Role = raw_role
            .parse()
            .map_err(|e: RoleParseError| AppError::unprocessable(e.to_string()))?;

        let previous_role = Self::get_user(store, user_id).await?.role;

        let user = store
            .set_role(user_id, role)
            .await
            .context("Failed to update role")
            .map_err(|e| AppError::internal("store_error", e))?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(
            user_id = %user_id,
            previous_role = %previous_role,
            role = %role,
            changed_by = %changed_by,
            "Role changed"
        );

        Ok(RoleChangedResponse {
            success: true,
            previous_role,
            user,
        })
    }
}
