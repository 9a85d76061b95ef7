use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every failure the API can report. The display string of each variant is
/// the exact message clients see in the `error` field of the response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("User not found!")]
    UserNotFound,
    #[error("Task not found!")]
    TaskNotFound,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Pro plan is already activated.")]
    AlreadyPro,
    #[error("You already have a ten todos created!")]
    QuotaExceeded,
    #[error("Is not a valid ID!")]
    InvalidId,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound | ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::UsernameTaken | ApiError::AlreadyPro | ApiError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::QuotaExceeded => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(%status, error = %self, "request rejected");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
