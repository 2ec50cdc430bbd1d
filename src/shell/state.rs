use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::users::use_cases::create_user::handler::CreateUserHandler;
use crate::modules::users::use_cases::delete_user::handler::DeleteUserHandler;
use crate::modules::users::use_cases::get_user::handler::GetUserHandler;
use crate::modules::users::use_cases::list_users::handler::ListUsersHandler;
use std::sync::Arc;

/// Shared by every request. All handlers point at the same store.
#[derive(Clone)]
pub struct AppState {
    pub list_users: Arc<ListUsersHandler<InMemoryUserStore>>,
    pub get_user: Arc<GetUserHandler<InMemoryUserStore>>,
    pub create_user: Arc<CreateUserHandler<InMemoryUserStore>>,
    pub delete_user: Arc<DeleteUserHandler<InMemoryUserStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryUserStore>) -> Self {
        Self {
            list_users: Arc::new(ListUsersHandler::new(store.clone())),
            get_user: Arc::new(GetUserHandler::new(store.clone())),
            create_user: Arc::new(CreateUserHandler::new(store.clone())),
            delete_user: Arc::new(DeleteUserHandler::new(store)),
        }
    }
}
