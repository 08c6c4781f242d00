//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::MedalAppState;
pub use router::{medal_router, medal_router_generic, race_router, race_router_generic};
