// Port for the user registry storage.
//
// Purpose
// - Describe the four store operations the use cases depend on.
//
// Boundaries
// - Each operation is an atomic unit. Implementations own their synchronization
//   and never hand a lock or guard to callers.

use crate::modules::users::core::user::User;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserStoreError {
    #[error("user not found: {0}")]
    NotFound(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Point-in-time copy of every record, in no particular order.
    async fn list(&self) -> Vec<User>;

    async fn get(&self, id: &str) -> Result<User, UserStoreError>;

    /// Inserts or replaces the record keyed by `user.id`.
    async fn upsert(&self, user: User);

    /// Removes the record and returns its last known value.
    async fn delete(&self, id: &str) -> Result<User, UserStoreError>;
}
