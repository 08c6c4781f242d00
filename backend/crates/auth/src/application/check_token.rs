//! Check Token Use Case
//!
//! Verifies a bearer token and resolves it to the current [`Identity`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::application::config::AuthConfig;
use crate::domain::entity::{identity::Identity, token::TokenClaims};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

pub struct CheckTokenUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CheckTokenUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn validate(&self, token: &str) -> AuthResult<Identity> {
        self.validate_at(token, Utc::now()).await
    }

    /// Signature, then expiry, then a fresh account lookup
    ///
    /// The identity comes from the store row, so a renamed account shows
    /// its current display name and a deleted one fails.
    pub async fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Identity> {
        let claims: TokenClaims = self
            .config
            .signer
            .verify(token)
            .map_err(|_| AuthError::MalformedToken)?;

        if claims.is_expired_at(now.timestamp()) {
            return Err(AuthError::Expired);
        }

        let account_id = AccountId::from_uuid(claims.sub);
        let account = self
            .repo
            .find_by_id(&account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        Ok(Identity::from(account))
    }
}
