use crate::modules::users::core::user::User;
use crate::modules::users::core::user_store::UserStore;
use std::sync::Arc;
use tracing::info;

/// Upserts the user. An existing id is replaced without complaint.
pub struct CreateUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the record as stored.
    pub async fn handle(&self, user: User) -> User {
        self.store.upsert(user.clone()).await;
        info!(user_id = %user.id, "stored user");
        user
    }
}
