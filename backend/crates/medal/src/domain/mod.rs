//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{ClaimPatch, MedalClaim, MedalClaimDetails, NewMedalClaim, Race, RaceResult};
pub use repository::{MedalClaimRepository, RaceRepository};
