//! Medal and Race Routers

use auth::domain::repository::AccountRepository;
use auth::{AuthMiddlewareState, PgAuthRepository, optional_auth, require_auth};
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::domain::repository::{MedalClaimRepository, RaceRepository};
use crate::infra::postgres::PgMedalRepository;
use crate::presentation::handlers::{self, MedalAppState};

/// Create the medal router (`/api/medals`) with PostgreSQL repositories
pub fn medal_router(
    repo: PgMedalRepository,
    auth: AuthMiddlewareState<PgAuthRepository>,
) -> Router {
    medal_router_generic(repo, auth)
}

/// Create the race router (`/api/races`) with PostgreSQL repositories
pub fn race_router(
    repo: PgMedalRepository,
    auth: AuthMiddlewareState<PgAuthRepository>,
) -> Router {
    race_router_generic(repo, auth)
}

/// Create a generic medal router; every route requires a bearer token
pub fn medal_router_generic<R, A>(repo: R, auth: AuthMiddlewareState<A>) -> Router
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
    A: AccountRepository + Send + Sync + 'static,
{
    let state = MedalAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_medals::<R>))
        .route("/claim", post(handlers::claim_medal::<R>))
        .route(
            "/{id}",
            patch(handlers::update_medal::<R>).delete(handlers::delete_medal::<R>),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_auth::<A>))
        .with_state(state)
}

/// Create a generic race router; a token is optional
pub fn race_router_generic<R, A>(repo: R, auth: AuthMiddlewareState<A>) -> Router
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
    A: AccountRepository + Send + Sync + 'static,
{
    let state = MedalAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_races::<R>))
        .route("/{id}", get(handlers::get_race::<R>))
        .route("/{id}/stats", get(handlers::race_results::<R>))
        .route_layer(middleware::from_fn_with_state(auth, optional_auth::<A>))
        .with_state(state)
}
