use crate::modules::users::core::user::User;
use crate::modules::users::core::user_store::UserStore;
use std::sync::Arc;
use tracing::debug;

pub struct ListUsersHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListUsersHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Vec<User> {
        let users = self.store.list().await;
        debug!(count = users.len(), "listed users");
        users
    }
}
