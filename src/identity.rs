//! Identity resolution seam. The API identifies the caller by a plain
//! `username` request header; this extractor is the only place that knows
//! the header name, so swapping the mechanism later touches one module.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

pub const USERNAME_HEADER: &str = "username";

/// The username the caller claims to be. Resolution against the store is
/// the account-existence gate's job; a request without the header can never
/// resolve to a user, so it rejects with the same "User not found!" error.
#[derive(Debug, Clone)]
pub struct Identity(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::UserNotFound)?;

        Ok(Identity(username.to_owned()))
    }
}
