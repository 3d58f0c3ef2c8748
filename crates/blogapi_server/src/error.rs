//! Error types for the blog API server.

use crate::envelope::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogapi_core::ValidationErrors;
use thiserror::Error;

/// Result type for request handling.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message sent to clients for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Errors a request can end with.
///
/// Client-facing variants carry the localized text returned in the
/// envelope's `error` field. `Internal` carries a diagnostic that is only
/// logged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or missing fields.
    #[error("{0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule would be broken.
    #[error("{0}")]
    Conflict(String),

    /// Credentials were rejected.
    #[error("{0}")]
    Unauthorized(String),

    /// The path exists but not for this HTTP method.
    #[error("Método não permitido")]
    MethodNotAllowed,

    /// Unexpected failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        !self.is_server_error()
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Internal(_))
    }

    /// Text safe to send to the client.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = ApiResponse::<()>::failure(self.public_message());
        (status, Json(body)).into_response()
    }
}
