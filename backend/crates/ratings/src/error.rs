//! Ratings Error Types
//!
//! Ratings-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Ratings-specific result type alias
pub type RatingsResult<T> = Result<T, RatingsError>;

/// Ratings-specific error variants
#[derive(Debug, Error)]
pub enum RatingsError {
    /// Score outside the closed range [1, 10]
    #[error("score must be between 1 and 10 (got {0})")]
    InvalidScore(i32),

    /// Rated date is not a YYYY-MM-DD calendar day
    #[error("invalid date format, use YYYY-MM-DD")]
    InvalidDate(String),

    /// No category identifier supplied
    #[error("category_id is required")]
    MissingCategory,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RatingsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RatingsError::InvalidScore(_)
            | RatingsError::InvalidDate(_)
            | RatingsError::MissingCategory => StatusCode::BAD_REQUEST,
            RatingsError::Database(_) | RatingsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RatingsError::InvalidScore(_)
            | RatingsError::InvalidDate(_)
            | RatingsError::MissingCategory => ErrorKind::BadRequest,
            RatingsError::Database(_) | RatingsError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RatingsError::Database(e) => {
                tracing::error!(error = %e, "Ratings database error");
            }
            RatingsError::Internal(msg) => {
                tracing::error!(message = %msg, "Ratings internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Ratings validation error");
            }
        }
    }
}

impl IntoResponse for RatingsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RatingsError::InvalidScore(0).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RatingsError::InvalidDate("01/01/2024".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RatingsError::MissingCategory.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RatingsError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
