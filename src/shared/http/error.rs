use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::any::Any;
use thiserror::Error;
use tracing::{debug, error};

use crate::modules::users::use_cases::errors::ApplicationError;

/// Every failure a request can end in. The display string is the `error` field
/// of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("bad request")]
    BadRequest,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(_) => ApiError::NotFound,
        }
    }
}

/// Answers any method or path the router does not know.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, %uri, "no route matched");
    ApiError::NotFound
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");
    ApiError::Internal.into_response()
}
