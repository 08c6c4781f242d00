//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, UpdateProfileUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, SignInRequest, SignUpRequest, UpdateProfileRequest, UserResponse,
    VerifyResponse,
};
use crate::presentation::middleware::{AuthMiddlewareState, AuthenticatedAccount};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: a derive would demand `R: Clone`, but only the `Arc` is cloned.
impl<R> Clone for AuthAppState<R>
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

impl<R> AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub fn middleware_state(&self) -> AuthMiddlewareState<R> {
        AuthMiddlewareState {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
        display_name: req.display_name,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        user: output.account.into(),
        token: output.token.token,
        expires_at: output.token.expires_at,
    }))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        user: output.account.into(),
        token: output.token.token,
        expires_at: output.token.expires_at,
    }))
}

// ============================================================================
// Verify (requires authentication)
// ============================================================================

/// GET /api/auth/verify
pub async fn verify(AuthenticatedAccount(identity): AuthenticatedAccount) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        user: identity.into(),
    })
}

// ============================================================================
// Profile (requires authentication)
// ============================================================================

/// GET /api/user/profile
pub async fn get_profile(
    AuthenticatedAccount(identity): AuthenticatedAccount,
) -> Json<UserResponse> {
    Json(identity.into())
}

/// PATCH /api/user/profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    AuthenticatedAccount(identity): AuthenticatedAccount,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone());

    let account = use_case
        .execute(&identity.account_id, req.display_name)
        .await?;

    Ok(Json(account.into()))
}
