//! Domain Value Objects
//!
//! Identifiers and validated claim inputs.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum bib number length
pub const BIB_NUMBER_MAX_LENGTH: usize = 32;

/// Maximum full name length
pub const FULL_NAME_MAX_LENGTH: usize = 200;

// ============================================================================
// Serial identifiers
// ============================================================================

macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

serial_id!(
    /// `races.race_id`
    RaceId
);
serial_id!(
    /// `race_results.race_result_id`
    RaceResultId
);
serial_id!(
    /// `medal_claims.claim_id`
    ClaimId
);

// ============================================================================
// Bib Number
// ============================================================================

/// Race bib number as printed; matched exactly after trimming
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BibNumber(String);

impl BibNumber {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let bib = raw.into().trim().to_string();

        if bib.is_empty() {
            return Err(AppError::bad_request("Bib number is required"));
        }

        if bib.chars().count() > BIB_NUMBER_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Bib number must be at most {} characters",
                BIB_NUMBER_MAX_LENGTH
            )));
        }

        Ok(Self(bib))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BibNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Full Name
// ============================================================================

/// Runner's name as entered on the claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let name = raw.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Full name is required"));
        }

        if name.chars().count() > FULL_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Full name must be at most {} characters",
                FULL_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Blank notes are stored as absent
pub fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bib_number() {
        assert_eq!(BibNumber::new(" 1234 ").unwrap().as_str(), "1234");
        assert!(BibNumber::new("").is_err());
        assert!(BibNumber::new("   ").is_err());
        assert!(BibNumber::new("9".repeat(BIB_NUMBER_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(FullName::new("Ann Runner").unwrap().as_str(), "Ann Runner");
        assert!(FullName::new("").is_err());
        assert!(FullName::new("x".repeat(FULL_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_normalize_notes() {
        assert_eq!(normalize_notes(None), None);
        assert_eq!(normalize_notes(Some("   ".into())), None);
        assert_eq!(normalize_notes(Some(" PR! ".into())), Some("PR!".into()));
    }

    #[test]
    fn test_ids_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&RaceId::new(7)).unwrap(), "7");
        assert_eq!(ClaimId::from(3).to_string(), "3");
    }
}
