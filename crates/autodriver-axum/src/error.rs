//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and `GuiError` to HTTP status codes and a JSON body of
//! the form `{"error": "...", "status": 409}`.

use autodriver_core::CoreError;
use autodriver_gui::GuiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict with the current workbench state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Service unavailable (e.g., external service down).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::BadRequest(msg)
            | Self::Conflict(msg)
            | Self::ServiceUnavailable(msg)
            | Self::Internal(msg) => msg,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Settings(settings_err) => Self::BadRequest(settings_err.to_string()),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Configuration(msg) => Self::Internal(format!("Config: {msg}")),
            CoreError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<GuiError> for HttpError {
    fn from(e: GuiError) -> Self {
        match e {
            GuiError::ValidationFailed(msg) => Self::BadRequest(msg),
            GuiError::Conflict(msg) => Self::Conflict(msg),
            GuiError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gui_conflict_is_409() {
        let err = HttpError::from(GuiError::Conflict("busy".to_string()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_core_validation_is_400() {
        let err = HttpError::from(CoreError::Validation("bad arch".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad request: bad arch");
    }

    #[test]
    fn test_into_response_status() {
        let response = HttpError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
