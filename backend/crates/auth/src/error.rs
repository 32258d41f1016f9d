//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// An account with this email already exists
    #[error("an account with that email already exists")]
    EmailTaken,

    /// Unknown email or wrong password. Deliberately a single variant so
    /// the response cannot be used for account enumeration.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Token signature, structure, or expiry check failed
    #[error("invalid or expired token")]
    TokenInvalid,

    /// Token could not be signed
    #[error("failed to generate token")]
    TokenCreation(String),

    /// No Authorization header on a protected route
    #[error("missing authorization header")]
    MissingAuthHeader,

    /// Email failed format validation
    #[error("invalid email: {0}")]
    InvalidEmail(String),

    /// Password failed policy validation
    #[error("invalid password: {0}")]
    PasswordPolicy(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid
            | AuthError::MissingAuthHeader => StatusCode::UNAUTHORIZED,
            AuthError::InvalidEmail(_) | AuthError::PasswordPolicy(_) => StatusCode::BAD_REQUEST,
            AuthError::TokenCreation(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid
            | AuthError::MissingAuthHeader => ErrorKind::Unauthorized,
            AuthError::InvalidEmail(_) | AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::TokenCreation(_) | AuthError::Database(_) | AuthError::Internal(_) => {
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::TokenCreation(msg) => {
                tracing::error!(message = %msg, "Token signing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
