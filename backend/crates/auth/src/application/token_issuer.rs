//! Token Issuer
//!
//! Mints signed bearer tokens for an authenticated account.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::{account::Account, token::TokenClaims};
use crate::error::{AuthError, AuthResult};

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct TokenIssuer {
    config: Arc<AuthConfig>,
}

impl TokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn issue(&self, account: &Account) -> AuthResult<IssuedToken> {
        self.issue_at(account, Utc::now())
    }

    /// Sign `{ sub, email, iat: now, exp: now + ttl }`
    pub fn issue_at(&self, account: &Account, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = now.timestamp();
        let exp = iat.saturating_add(self.config.token_ttl_secs());

        let claims = TokenClaims {
            sub: account.account_id.into_uuid(),
            email: account.email.as_str().to_string(),
            iat,
            exp,
        };

        let token = self
            .config
            .signer
            .sign(&claims)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::Internal(format!("Token expiry out of range: {exp}")))?;

        tracing::debug!(
            account_id = %account.account_id,
            expires_at = %expires_at,
            "Issued token"
        );

        Ok(IssuedToken { token, expires_at })
    }
}
