use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::shared::http::error::ApiError;

/// Serializes `value` into a 200 JSON response.
///
/// Callers must have released any store guard before calling this.
pub fn json_ok<T>(value: &T) -> Result<Response, ApiError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(value).map_err(|err| {
        error!(error = %err, "failed to serialize response");
        ApiError::Internal
    })?;
    Ok((
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}
