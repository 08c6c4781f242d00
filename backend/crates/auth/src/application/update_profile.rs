//! Update Profile Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::DisplayName;
use crate::error::{AuthError, AuthResult};

pub struct UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Apply the supplied fields; with nothing supplied, return the account as is
    pub async fn execute(
        &self,
        account_id: &AccountId,
        display_name: Option<String>,
    ) -> AuthResult<Account> {
        let account = match display_name {
            Some(name) => {
                let name = DisplayName::new(name)?;
                let account = self.repo.update_display_name(account_id, &name).await?;
                if account.is_some() {
                    tracing::info!(account_id = %account_id, "Display name updated");
                }
                account
            }
            None => self.repo.find_by_id(account_id).await?,
        };

        account.ok_or(AuthError::AccountNotFound)
    }
}
