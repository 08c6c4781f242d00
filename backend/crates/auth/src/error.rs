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
    /// Missing, blank or badly formatted input
    #[error("{0}")]
    Validation(String),

    /// Email already registered
    #[error("An account with this email already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password (deliberately the same variant)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Bad signature or undecodable token
    #[error("Token is malformed")]
    MalformedToken,

    /// Token past its expiry
    #[error("Token has expired")]
    Expired,

    /// Token subject no longer exists
    #[error("Account not found")]
    AccountNotFound,

    /// No usable credential on a protected route
    #[error("Authentication required")]
    Unauthenticated,

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
            AuthError::Validation(_) | AuthError::DuplicateAccount => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::MalformedToken
            | AuthError::Expired
            | AuthError::AccountNotFound
            | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::DuplicateAccount => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::MalformedToken
            | AuthError::Expired
            | AuthError::AccountNotFound
            | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// True for the failures a token can produce during validation
    pub fn is_token_failure(&self) -> bool {
        matches!(
            self,
            AuthError::MalformedToken | AuthError::Expired | AuthError::AccountNotFound
        )
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::DuplicateAccount => err.with_action("Sign in instead, or use another email"),
            AuthError::Expired => err.with_action("Please sign in again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
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

/// Value objects validate into `AppError`; client-side kinds become
/// `Validation`, anything else is internal.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
