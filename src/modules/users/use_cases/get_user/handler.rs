use crate::modules::users::core::user::User;
use crate::modules::users::core::user_store::UserStore;
use crate::modules::users::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::debug;

pub struct GetUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &str) -> Result<User, ApplicationError> {
        let user = self.store.get(id).await?;
        debug!(user_id = %id, "fetched user");
        Ok(user)
    }
}
