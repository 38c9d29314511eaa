use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{NewPrincipal, Principal, Role};
use crate::store::{StoreError, UserStore};

/// In-process [`UserStore`], used when no `DATABASE_URL` is configured and
/// as the fake behind integration tests. Cloning shares the same map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryUserStore {
    principals: Arc<RwLock<HashMap<String, Principal>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_principals<I>(principals: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = NewPrincipal>,
    {
        let store = Self::new();
        for principal in principals {
            store.create(principal).await?;
        }
        Ok(store)
    }

    pub async fn len(&self) -> usize {
        self.principals.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.principals.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Principal>, StoreError> {
        Ok(self.principals.read().await.get(user_id).cloned())
    }

    async fn create(&self, new_principal: NewPrincipal) -> Result<Principal, StoreError> {
        let mut principals = self.principals.write().await;
        if principals.contains_key(&new_principal.id)
            || principals.values().any(|p| p.email == new_principal.email)
        {
            return Err(StoreError::Conflict(new_principal.id));
        }

        let now = Utc::now();
        let principal = Principal {
            id: new_principal.id,
            email: new_principal.email,
            name: new_principal.name,
            role: new_principal.role,
            created_at: now,
            updated_at: now,
        };
        principals.insert(principal.id.clone(), principal.clone());
        Ok(principal)
    }

    async fn set_role(&self, user_id: &str, role: Role) -> Result<Option<Principal>, StoreError> {
        let mut principals = self.principals.write().await;
        Ok(principals.get_mut(user_id).map(|principal| {
            principal.role = role;
            principal.updated_at = Utc::now();
            principal.clone()
        }))
    }
}
