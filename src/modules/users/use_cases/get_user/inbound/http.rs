use axum::{extract::State, response::Response};

use crate::shared::http::error::ApiError;
use crate::shared::http::response::json_ok;
use crate::shared::http::user_id::UserId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, id: UserId) -> Result<Response, ApiError> {
    let user = state.get_user.handle(id.as_str()).await?;
    json_ok(&user)
}
