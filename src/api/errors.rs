use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::response::Envelope;
use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(Envelope::error(self.status, self.message));

        (self.status, body).into_response()
    }
}

// NotFound gets its own status; every other failure is a generic bad request.
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            RepositoryError::IdExhausted(_) => Self::bad_request(err.to_string()),
            RepositoryError::Store(ref e) => {
                tracing::error!(error = %e, "user store failure");
                Self::bad_request(err.to_string())
            }
        }
    }
}
