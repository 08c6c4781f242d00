//! List Medals Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entities::MedalClaimDetails;
use crate::domain::repository::MedalClaimRepository;
use crate::error::MedalResult;

pub struct ListMedalsUseCase<R>
where
    R: MedalClaimRepository,
{
    repo: Arc<R>,
}

impl<R> ListMedalsUseCase<R>
where
    R: MedalClaimRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller's claims, most recently claimed first
    pub async fn execute(&self, account_id: &AccountId) -> MedalResult<Vec<MedalClaimDetails>> {
        self.repo.list_for_account(account_id).await
    }
}
