// In memory user store.
//
// Purpose
// - Back the registry for the lifetime of the process. Nothing is persisted.
//
// Responsibilities
// - Keep records in a map keyed by user id, guarded by a single reader/writer lock.
// - Hold a guard only for the copy, lookup or mutation itself. Serialization happens
//   in the callers, after the guard is gone.

use crate::modules::users::core::user::User;
use crate::modules::users::core::user_store::{UserStore, UserStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    async fn get(&self, id: &str) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| UserStoreError::NotFound(id.to_string()))
    }

    async fn upsert(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    async fn delete(&self, id: &str) -> Result<User, UserStoreError> {
        // Check and removal are separate critical sections. A concurrent delete may
        // win the race, so removing an already missing key is a no-op.
        let user = self.get(id).await?;
        self.users.write().await.remove(id);
        Ok(user)
    }
}
