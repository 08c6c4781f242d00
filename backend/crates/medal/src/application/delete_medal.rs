//! Delete Medal Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::repository::MedalClaimRepository;
use crate::domain::value_objects::ClaimId;
use crate::error::{MedalError, MedalResult};

pub struct DeleteMedalUseCase<R>
where
    R: MedalClaimRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteMedalUseCase<R>
where
    R: MedalClaimRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, account_id: &AccountId, claim_id: ClaimId) -> MedalResult<()> {
        if !self.repo.delete(account_id, claim_id).await? {
            return Err(MedalError::NotFound);
        }

        tracing::info!(
            account_id = %account_id,
            claim_id = %claim_id,
            "Medal claim deleted"
        );

        Ok(())
    }
}
