//! Router Assembly
//!
//! Mounts the service routers under `/api` and adds the ambient routes and
//! layers shared by all of them.

use std::sync::Arc;

use auth::{AuthConfig, AuthMiddlewareState, PgAuthRepository, auth_router, user_router};
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use medal::{PgMedalRepository, medal_router, race_router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router
pub fn build(pool: PgPool, auth_config: Arc<AuthConfig>, frontend_origins: &[String]) -> Router {
    let accounts = PgAuthRepository::new(pool.clone());
    let medals = PgMedalRepository::new(pool);
    let session = AuthMiddlewareState::new(Arc::new(accounts.clone()), auth_config.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_router(accounts.clone(), auth_config.clone()))
        .nest("/api/user", user_router(accounts, auth_config))
        .nest("/api/medals", medal_router(medals.clone(), session.clone()))
        .nest("/api/races", race_router(medals, session))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_origins))
}

pub fn cors_layer(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

pub async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}
