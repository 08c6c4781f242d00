//! Update Medal Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entities::{ClaimPatch, MedalClaim};
use crate::domain::repository::MedalClaimRepository;
use crate::domain::value_objects::{ClaimId, normalize_notes};
use crate::error::{MedalError, MedalResult};

pub struct UpdateMedalUseCase<R>
where
    R: MedalClaimRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateMedalUseCase<R>
where
    R: MedalClaimRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Apply only the supplied fields to a claim the caller owns.
    ///
    /// Blank notes count as not supplied. A patch with nothing left still
    /// checks ownership and returns the claim unchanged.
    pub async fn execute(
        &self,
        account_id: &AccountId,
        claim_id: ClaimId,
        patch: ClaimPatch,
    ) -> MedalResult<MedalClaim> {
        let patch = ClaimPatch {
            notes: normalize_notes(patch.notes),
            ..patch
        };

        let claim = self
            .repo
            .update(account_id, claim_id, &patch)
            .await?
            .ok_or(MedalError::NotFound)?;

        if patch.is_empty() {
            tracing::debug!(account_id = %account_id, claim_id = %claim_id, "Empty medal claim update");
        } else {
            tracing::info!(
                account_id = %account_id,
                claim_id = %claim_id,
                notes = patch.notes.is_some(),
                medal_image_url = patch.medal_image_url.is_some(),
                "Medal claim updated"
            );
        }

        Ok(claim)
    }
}
