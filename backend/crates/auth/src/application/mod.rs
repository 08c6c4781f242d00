//! Application Layer
//!
//! Use cases and application services.

pub mod check_token;
pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod token_issuer;
pub mod update_profile;

// Re-exports
pub use check_token::CheckTokenUseCase;
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use update_profile::UpdateProfileUseCase;
