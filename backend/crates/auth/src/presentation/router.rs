//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the Auth router (`/api/auth`) with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create the user profile router (`/api/user`) with PostgreSQL repository
pub fn user_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    // route_layer only wraps routes registered before it
    Router::new()
        .route("/verify", get(handlers::verify))
        .route_layer(middleware::from_fn_with_state(
            state.middleware_state(),
            require_auth::<R>,
        ))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .with_state(state)
}

/// Create a generic user profile router for any repository implementation
pub fn user_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/profile",
            get(handlers::get_profile).patch(handlers::update_profile::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.middleware_state(),
            require_auth::<R>,
        ))
        .with_state(state)
}
