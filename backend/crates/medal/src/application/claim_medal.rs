//! Claim Medal Use Case
//!
//! Links the caller to a race through the result row carrying their bib.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entities::{MedalClaim, NewMedalClaim};
use crate::domain::repository::{MedalClaimRepository, RaceRepository};
use crate::domain::value_objects::{BibNumber, FullName, RaceId, normalize_notes};
use crate::error::{MedalError, MedalResult};

/// Claim input
pub struct ClaimMedalInput {
    pub race_id: Option<i64>,
    pub bib_number: String,
    pub full_name: String,
    pub notes: Option<String>,
}

/// Claim medal use case
pub struct ClaimMedalUseCase<R>
where
    R: RaceRepository + MedalClaimRepository,
{
    repo: Arc<R>,
}

impl<R> ClaimMedalUseCase<R>
where
    R: RaceRepository + MedalClaimRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        account_id: &AccountId,
        input: ClaimMedalInput,
    ) -> MedalResult<MedalClaim> {
        let race_id = match input.race_id {
            Some(id) if id > 0 && !input.bib_number.trim().is_empty() => RaceId::new(id),
            _ => {
                return Err(MedalError::Validation(
                    "Race ID and bib number are required".to_string(),
                ));
            }
        };
        let bib_number = BibNumber::new(input.bib_number)?;
        let full_name = FullName::new(input.full_name)?;

        let result = self
            .repo
            .find_result_by_bib(race_id, &bib_number)
            .await?
            .ok_or(MedalError::NoMatchingResult)?;

        if self.repo.exists_for_race(account_id, race_id).await? {
            return Err(MedalError::AlreadyClaimed);
        }

        let new_claim = NewMedalClaim {
            account_id: *account_id,
            race_id,
            race_result_id: result.race_result_id,
            full_name,
            notes: normalize_notes(input.notes),
        };

        // The pre-check can lose a race; the store's uniqueness signal
        // surfaces as AlreadyClaimed as well.
        let claim = self.repo.create(&new_claim).await?;

        tracing::info!(
            account_id = %account_id,
            race_id = %race_id,
            claim_id = %claim.claim_id,
            "Medal claimed"
        );

        Ok(claim)
    }
}
