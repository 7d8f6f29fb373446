//! Error types for the review service
//!
//! Two disjoint kinds of failure cross the HTTP boundary: validation errors
//! (client-input defect, 400, user-facing message) and store/internal errors
//! (500, cause logged server-side, only a generic message returned).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected by the validation gate. The message is user-facing
    /// and its wording is part of the API contract.
    #[error("{message}")]
    Validation { message: String },

    #[error("{field} is required")]
    MissingField { field: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Database connection error: {message}")]
    DatabaseConnection { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Internal failure whose message is safe to return to the client.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        AppError::MissingField {
            field: field.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation { .. } | AppError::MissingField { .. } => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            AppError::Database(_)
            | AppError::DatabaseConnection { .. }
            | AppError::Configuration { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Collapse an infrastructure failure into a generic client-facing
    /// message, logging the underlying cause. Client errors pass through
    /// untouched so their exact wording reaches the caller.
    pub fn redact(self, public_message: &str) -> Self {
        if self.is_server_error() {
            tracing::error!(error = %self, "{public_message}");
            AppError::Internal {
                message: public_message.to_string(),
            }
        } else {
            self
        }
    }
}

/// Wire shape of every error body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(
                error = %self,
                status = status.as_u16(),
                "Server error"
            );
            match self {
                AppError::Internal { message } => message,
                _ => "Internal server error".to_string(),
            }
        } else {
            tracing::warn!(
                error = %self,
                status = status.as_u16(),
                "Client error"
            );
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
