//! Session Middleware
//!
//! Resolves `Authorization: Bearer <token>` into an [`Identity`] stored in
//! request extensions. Handlers read it back through the
//! [`AuthenticatedAccount`] and [`MaybeAccount`] extractors.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;

use crate::application::CheckTokenUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Middleware state
pub struct AuthMiddlewareState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthMiddlewareState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthMiddlewareState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    async fn resolve(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        let token = extract_bearer(headers).map_err(|e| {
            tracing::debug!(reason = %e, "No usable bearer token");
            AuthError::Unauthenticated
        })?;

        CheckTokenUseCase::new(self.repo.clone(), self.config.clone())
            .validate(token)
            .await
    }
}

/// Middleware that requires a valid bearer token
///
/// Token failures collapse into a generic 401; store failures stay 500.
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> AuthResult<Response>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let resolved = state.resolve(req.headers()).await;
    match resolved {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Err(e) if e.is_token_failure() => {
            tracing::warn!(error = %e, "Rejected bearer token");
            Err(AuthError::Unauthenticated)
        }
        Err(e) => Err(e),
    }
}

/// Middleware that attaches an identity when one can be resolved
///
/// Never rejects; any failure leaves the request anonymous.
pub async fn optional_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: AccountRepository + Send + Sync + 'static,
{
    let resolved = state.resolve(req.headers()).await;
    match resolved {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Continuing anonymously");
        }
    }

    next.run(req).await
}

// ============================================================================
// Extractors
// ============================================================================

/// Identity of the caller on a route behind [`require_auth`]
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub Identity);

impl<S> FromRequestParts<S> for AuthenticatedAccount
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(Self)
            .ok_or(AuthError::Unauthenticated)
    }
}

/// Identity of the caller, if any, on a route behind [`optional_auth`]
#[derive(Debug, Clone)]
pub struct MaybeAccount(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeAccount
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Identity>().cloned()))
    }
}
