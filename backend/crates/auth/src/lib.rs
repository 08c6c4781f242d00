//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Accounts, identity, token claims, repository traits
//! - `application/` - Register/verify, token issuing and validation
//! - `infra/` - PostgreSQL credential store
//! - `presentation/` - HTTP handlers, DTOs, router, session middleware
//!
//! ## Features
//! - Account signup/signin with email + password
//! - Stateless bearer tokens (HS256 JWT, 24h by default)
//! - Mandatory and optional session middleware resolving an [`Identity`]
//! - Profile read/update
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, random salt, optional pepper
//! - Unknown email and wrong password are indistinguishable
//! - Every request re-reads the account, so deleted accounts stop
//!   authenticating immediately

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::identity::Identity;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{
    AuthMiddlewareState, AuthenticatedAccount, MaybeAccount, optional_auth, require_auth,
};
pub use presentation::router::{auth_router, user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
