use async_trait::async_trait;

use crate::models::{NewPrincipal, Principal, Role, RoleParseError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored principal has an invalid role: {0}")]
    InvalidRole(#[from] RoleParseError),

    #[error("principal already exists: {0}")]
    Conflict(String),
}

/// Read/write access to principals.
///
/// The role gate only needs [`UserStore::find_by_id`]; the remaining
/// operations back the administrative surface.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Principal>, StoreError>;

    async fn create(&self, new_principal: NewPrincipal) -> Result<Principal, StoreError>;

    /// Returns `None` when no principal has this id.
    async fn set_role(&self, user_id: &str, role: Role) -> Result<Option<Principal>, StoreError>;

    async fn is_admin(&self, user_id: &str) -> Result<bool, StoreError> {
        Ok(self
            .find_by_id(user_id)
            .await?
            .is_some_and(|principal| principal.is_admin()))
    }

    async fn is_super_admin(&self, user_id: &str) -> Result<bool, StoreError> {
        Ok(self
            .find_by_id(user_id)
            .await?
            .is_some_and(|principal| principal.is_super_admin()))
    }
}
