use axum::{extract::State, response::Response};

use crate::shared::http::error::ApiError;
use crate::shared::http::response::json_ok;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = state.list_users.handle().await;
    json_ok(&users)
}
