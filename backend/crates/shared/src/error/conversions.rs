//! Error conversions - store errors in, HTTP responses out
//!
//! Store error classification and the HTTP rendering of
//! [`AppError`](super::app_error::AppError).

#[cfg(feature = "axum")]
use super::app_error::AppError;

/// PostgreSQL `unique_violation`
pub const PG_UNIQUE_VIOLATION: &str = "23505";

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Whether `err` is a unique-constraint violation, optionally on a specific
/// constraint name.
///
/// Repositories use this to turn the store's uniqueness signal into a domain
/// error (`DuplicateAccount`, `AlreadyClaimed`).
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            let code_matches = db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION);
            match constraint {
                Some(name) => code_matches && db_err.constraint() == Some(name),
                None => code_matches,
            }
        }
        _ => false,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details; `error` repeats the public message
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.public_message(),
            "error": self.public_message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
