//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{
    AuthMiddlewareState, AuthenticatedAccount, MaybeAccount, optional_auth, require_auth,
};
pub use router::{auth_router, auth_router_generic, user_router, user_router_generic};
