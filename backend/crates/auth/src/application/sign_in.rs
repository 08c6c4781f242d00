//! Sign In Use Case
//!
//! Checks email + password and issues a token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_issuer::{IssuedToken, TokenIssuer};
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub account: Account,
    pub token: IssuedToken,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Resolve the account for a credential pair
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn verify(&self, input: SignInInput) -> AuthResult<Account> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        // Input that could never have been registered cannot match
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(credentials) = self.repo.find_credentials_by_email(&email).await? else {
            raw_password.equalize_timing(self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };

        if !credentials
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        if credentials.password_hash.needs_rehash() {
            tracing::warn!(
                account_id = %credentials.account.account_id,
                "Stored password hash uses an outdated algorithm"
            );
        }

        Ok(credentials.account)
    }

    /// Verify, then issue a token
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let account = self.verify(input).await?;
        let token = TokenIssuer::new(self.config.clone()).issue(&account)?;

        tracing::info!(
            account_id = %account.account_id,
            "Account signed in"
        );

        Ok(SignInOutput { account, token })
    }
}
