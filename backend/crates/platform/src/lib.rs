//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no knowledge of accounts or medals:
//! - Cryptographic utilities (secure random bytes, Base64)
//! - Password hashing (Argon2id)
//! - Signed bearer tokens (JWT, HS256)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
pub mod jwt;
pub mod password;
