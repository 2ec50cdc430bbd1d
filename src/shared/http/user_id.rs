use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::shared::http::error::ApiError;

/// User id taken from the last path segment of `/users/{id}`.
///
/// Only a non-empty run of ASCII digits counts as an id. Anything else is
/// treated as a missing id, which the handlers answer with 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl UserId {
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        UserId::parse(&raw).ok_or(ApiError::NotFound)
    }
}
