//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AccountId;

use crate::domain::entities::{
    ClaimPatch, MedalClaim, MedalClaimDetails, NewMedalClaim, RaceResult, RaceSummary,
};
use crate::domain::value_objects::{BibNumber, ClaimId, RaceId};
use crate::error::MedalResult;

/// Race catalogue (read-only)
#[trait_variant::make(RaceRepository: Send)]
pub trait LocalRaceRepository {
    /// All races with claim counts, newest race date first
    async fn list_races(&self) -> MedalResult<Vec<RaceSummary>>;

    /// Find race by ID
    async fn find_race(&self, race_id: RaceId) -> MedalResult<Option<RaceSummary>>;

    /// Results of a race, best overall place first, unplaced last
    async fn list_results(&self, race_id: RaceId) -> MedalResult<Vec<RaceResult>>;

    /// Exact `(race_id, bib_number)` lookup
    async fn find_result_by_bib(
        &self,
        race_id: RaceId,
        bib_number: &BibNumber,
    ) -> MedalResult<Option<RaceResult>>;
}

/// Medal claim repository trait
#[trait_variant::make(MedalClaimRepository: Send)]
pub trait LocalMedalClaimRepository {
    /// Check whether the account already claimed this race
    async fn exists_for_race(&self, account_id: &AccountId, race_id: RaceId) -> MedalResult<bool>;

    /// Insert a claim; a second claim for the same race yields `AlreadyClaimed`
    async fn create(&self, claim: &NewMedalClaim) -> MedalResult<MedalClaim>;

    /// Apply a patch to a claim owned by `account_id`
    async fn update(
        &self,
        account_id: &AccountId,
        claim_id: ClaimId,
        patch: &ClaimPatch,
    ) -> MedalResult<Option<MedalClaim>>;

    /// Delete a claim owned by `account_id`; false if nothing matched
    async fn delete(&self, account_id: &AccountId, claim_id: ClaimId) -> MedalResult<bool>;

    /// Claims of one account, most recent first
    async fn list_for_account(&self, account_id: &AccountId)
    -> MedalResult<Vec<MedalClaimDetails>>;
}
