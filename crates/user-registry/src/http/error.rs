//! Request-level errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::user_actor::UserError;

/// Everything a `/users` request can fail with. Rendered as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input; the message is fixed per check.
    #[error("{0}")]
    BadRequest(&'static str),

    /// The referenced user does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The method is not served on this path.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The registry actor is gone.
    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::ActorCommunicationError(_) => ApiError::Unavailable(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}
