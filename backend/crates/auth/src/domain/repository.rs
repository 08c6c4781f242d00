//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AccountId;

use crate::domain::entity::account::{Account, Credentials};
use crate::domain::value_object::{DisplayName, Email, UserPassword};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account; a taken email yields `AuthError::DuplicateAccount`
    async fn create(&self, account: &Account, password_hash: &UserPassword) -> AuthResult<()>;

    /// Find account by id
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account and password hash by exact email
    async fn find_credentials_by_email(&self, email: &Email) -> AuthResult<Option<Credentials>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Set the display name; `None` when the account is gone
    async fn update_display_name(
        &self,
        account_id: &AccountId,
        display_name: &DisplayName,
    ) -> AuthResult<Option<Account>>;
}
