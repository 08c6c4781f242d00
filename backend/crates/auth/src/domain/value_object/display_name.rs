//! Display Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum display name length in characters
pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Name shown on the medal showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Display name is required"));
        }

        let len = name.chars().count();
        if len > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Display name must be at most {} characters (got {})",
                DISPLAY_NAME_MAX_LENGTH, len
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request(
                "Display name contains invalid control characters",
            ));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_trimmed() {
        let name = DisplayName::new("  A  ").unwrap();
        assert_eq!(name.as_str(), "A");
    }

    #[test]
    fn test_display_name_invalid() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("a\u{0000}b").is_err());
        assert!(DisplayName::new("x".repeat(DISPLAY_NAME_MAX_LENGTH + 1)).is_err());
        assert!(DisplayName::new("x".repeat(DISPLAY_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_display_name_counts_chars_not_bytes() {
        assert!(DisplayName::new("走".repeat(DISPLAY_NAME_MAX_LENGTH)).is_ok());
    }
}
