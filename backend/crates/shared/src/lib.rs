//! Shared Kernel - Domain-crossing minimal core
//!
//! The vocabulary both the `auth` and `medal` crates speak:
//! - The unified error type and its HTTP classification
//! - Typed identifiers that cross crate boundaries (`AccountId`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
