use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numclass_core::error::CoreError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for input validation failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A validation error from `numclass_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The query string could not be decoded (e.g. a repeated `number` key).
    #[error("Malformed query string: {reason}")]
    MalformedQuery { query: String, reason: String },

    /// No route matches the request.
    #[error("Route not found: {path}")]
    NotFound { path: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(core) => {
                let message = core.to_string();
                match core {
                    CoreError::MissingParameter { .. } => (
                        StatusCode::BAD_REQUEST,
                        ErrorResponse::new("MISSING_PARAMETER", message),
                    ),
                    CoreError::InvalidParameter { value, .. } => (
                        StatusCode::BAD_REQUEST,
                        ErrorResponse::new("INVALID_PARAMETER", message).with_number(value),
                    ),
                }
            }
            AppError::MalformedQuery { query, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    "MALFORMED_QUERY",
                    format!("Malformed query string: {reason}"),
                )
                .with_number(query),
            ),
            AppError::NotFound { path } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", format!("Route not found: {path}")),
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
