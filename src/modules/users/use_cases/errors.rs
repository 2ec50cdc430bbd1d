use crate::modules::users::core::user_store::UserStoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("user not found: {0}")]
    NotFound(String),
}

impl From<UserStoreError> for ApplicationError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::NotFound(id) => ApplicationError::NotFound(id),
        }
    }
}
