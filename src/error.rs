use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::fetcher::FetchError;

/// Error envelope shared by every operation.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required parameter is missing or malformed. No upstream call was made.
    #[error("{message}")]
    Validation { message: String },
    /// The target site was unreachable, timed out or answered with an error status.
    #[error("{message}")]
    Upstream { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::Upstream { message }
            | AppError::Internal { message } => message,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = ErrorBody {
            success: false,
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::upstream(e.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request parameters".to_string());

        AppError::bad_request(message)
    }
}
