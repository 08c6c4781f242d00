//! Medal Error Types
//!
//! This module provides medal-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Medal-specific result type alias
pub type MedalResult<T> = Result<T, MedalError>;

/// Medal-specific error variants
#[derive(Debug, Error)]
pub enum MedalError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// No race result with this bib number in this race
    #[error("No race result found for this bib number")]
    NoMatchingResult,

    /// The account already holds a claim for this race
    #[error("Medal already claimed for this race")]
    AlreadyClaimed,

    /// Claim absent or owned by another account
    #[error("Medal not found or not owned by user")]
    NotFound,

    /// Race does not exist
    #[error("Race not found")]
    RaceNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MedalError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MedalError::Validation(_) => StatusCode::BAD_REQUEST,
            MedalError::NoMatchingResult | MedalError::NotFound | MedalError::RaceNotFound => {
                StatusCode::NOT_FOUND
            }
            MedalError::AlreadyClaimed => StatusCode::CONFLICT,
            MedalError::Database(_) | MedalError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MedalError::Validation(_) => ErrorKind::BadRequest,
            MedalError::NoMatchingResult | MedalError::NotFound | MedalError::RaceNotFound => {
                ErrorKind::NotFound
            }
            MedalError::AlreadyClaimed => ErrorKind::Conflict,
            MedalError::Database(_) | MedalError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            MedalError::NoMatchingResult => {
                err.with_action("Check the bib number printed on your race results")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MedalError::Database(e) => {
                tracing::error!(error = %e, "Medal database error");
            }
            MedalError::Internal(msg) => {
                tracing::error!(message = %msg, "Medal internal error");
            }
            MedalError::AlreadyClaimed => {
                tracing::info!("Duplicate medal claim rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Medal error");
            }
        }
    }
}

impl IntoResponse for MedalError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for MedalError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            MedalError::Validation(err.message().to_string())
        } else {
            MedalError::Internal(err.to_string())
        }
    }
}
