use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::Response,
};
use tracing::warn;

use crate::modules::users::core::user::User;
use crate::shared::http::error::ApiError;
use crate::shared::http::response::json_ok;
use crate::shell::state::AppState;

/// Decodes the first JSON value in the body as a user. Trailing bytes are
/// ignored and no request `content-type` is required.
fn decode_user(body: &[u8]) -> Result<User, ApiError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<User>()
        .next()
    {
        Some(Ok(user)) => Ok(user),
        Some(Err(err)) => {
            warn!(error = %err, "rejected user body");
            Err(ApiError::BadRequest)
        }
        None => {
            warn!("rejected empty user body");
            Err(ApiError::BadRequest)
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = body.map_err(|err| {
        warn!(error = %err, "failed to read request body");
        ApiError::BadRequest
    })?;
    let user = decode_user(&body)?;
    let stored = state.create_user.handle(user).await;
    json_ok(&stored)
}
