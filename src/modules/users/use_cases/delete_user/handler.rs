use crate::modules::users::core::user::User;
use crate::modules::users::core::user_store::UserStore;
use crate::modules::users::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct DeleteUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the removed user's last known value.
    pub async fn handle(&self, id: &str) -> Result<User, ApplicationError> {
        let user = self.store.delete(id).await?;
        info!(user_id = %id, "deleted user");
        Ok(user)
    }
}
