//! Medal Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Races, race results, medal claims, repository traits
//! - `application/` - Claim/update/delete/list use cases, race browsing
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Claim Model
//! - A claim links an account to a race through the race-result row that
//!   carries the runner's bib number
//! - One claim per account per race; the `UNIQUE (account_id, race_id)`
//!   constraint is the final arbiter when two claims race
//! - Mutations are always scoped to the calling account

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{MedalError, MedalResult};
pub use infra::postgres::PgMedalRepository;
pub use presentation::router::{medal_router, race_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgMedalRepository as MedalStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
