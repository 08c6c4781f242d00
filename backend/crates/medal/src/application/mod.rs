//! Application Layer
//!
//! Use cases.

pub mod browse_races;
pub mod claim_medal;
pub mod delete_medal;
pub mod list_medals;
pub mod update_medal;

// Re-exports
pub use browse_races::BrowseRacesUseCase;
pub use claim_medal::{ClaimMedalInput, ClaimMedalUseCase};
pub use delete_medal::DeleteMedalUseCase;
pub use list_medals::ListMedalsUseCase;
pub use update_medal::UpdateMedalUseCase;
