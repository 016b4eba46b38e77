use axum::http::Uri;

use crate::error::AppError;

/// Fallback for unmatched routes and unsupported methods on known routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}
