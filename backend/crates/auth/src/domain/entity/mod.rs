//! Entity Module

pub mod account;
pub mod identity;
pub mod token;

pub use account::{Account, Credentials};
pub use identity::Identity;
pub use token::TokenClaims;
