//! Error handling for the SoilSync backend
//!
//! Every failure that reaches the HTTP layer is reported as a 500 with a
//! `{"error": "..."}` body. Request-level problems keep their message,
//! internal failures are logged and redacted.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // External service errors
    #[error("Speech recognition failed: {0}")]
    SpeechRecognition(String),

    // Internal errors
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(_) | AppError::ValidationError(_) | AppError::SpeechRecognition(_) => {
                self.to_string()
            }
            AppError::StorageError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        match &self {
            AppError::BadRequest(_) | AppError::ValidationError(_) => {
                tracing::warn!("Request rejected: {}", self)
            }
            _ => tracing::error!("Error: {:?}", self),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_keep_message() {
        let err = AppError::ValidationError("Land size must be a number".to_string());
        assert_eq!(err.public_message(), "Validation error: Land size must be a number");
    }

    #[test]
    fn test_internal_errors_are_redacted() {
        let err = AppError::StorageError("upload dir missing at /srv/x".to_string());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_every_error_is_a_500() {
        let response = AppError::BadRequest("missing field `city`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
