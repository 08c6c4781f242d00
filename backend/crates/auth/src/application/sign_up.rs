//! Sign Up Use Case
//!
//! Registers a new account and issues its first token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_issuer::{IssuedToken, TokenIssuer};
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{DisplayName, Email, RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub account: Account,
    pub token: IssuedToken,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Validate, hash and persist; the returned account carries no hash
    pub async fn register(&self, input: SignUpInput) -> AuthResult<Account> {
        if input.email.trim().is_empty()
            || input.password.is_empty()
            || input.display_name.trim().is_empty()
        {
            return Err(AuthError::Validation(
                "Email, password, and display name are required".to_string(),
            ));
        }

        let email = Email::new(input.email)?;
        let display_name = DisplayName::new(input.display_name)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateAccount);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let account = Account::new(email, display_name);

        // A concurrent signup can still win the race; the store reports it
        // as DuplicateAccount too.
        self.repo.create(&account, &password_hash).await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account registered"
        );

        Ok(account)
    }

    /// Register, then issue a token for the new account
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let account = self.register(input).await?;
        let token = TokenIssuer::new(self.config.clone()).issue(&account)?;

        Ok(SignUpOutput { account, token })
    }
}
