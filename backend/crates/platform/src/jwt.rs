//! Signed Token Encoding (JWT, HS256)
//!
//! Thin wrapper over `jsonwebtoken` that pins the algorithm and keeps the
//! key material out of `Debug` output. Expiry policy belongs to the caller:
//! [`HmacSigner::verify`] checks the signature and decodes the payload only.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Minimum accepted HMAC key length in bytes (RFC 7518 §3.2)
pub const MIN_KEY_LENGTH: usize = 32;

#[derive(Debug, Error)]
pub enum JwtError {
    /// Key shorter than [`MIN_KEY_LENGTH`]
    #[error("Signing key must be at least {MIN_KEY_LENGTH} bytes (got {0})")]
    KeyTooShort(usize),

    /// Encoding the claims failed
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Bad signature, wrong algorithm, or undecodable payload
    #[error("Token is malformed or its signature is invalid")]
    Malformed,
}

/// HS256 signer/verifier built from one process-wide secret
#[derive(Clone)]
pub struct HmacSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl HmacSigner {
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.len() < MIN_KEY_LENGTH {
            return Err(JwtError::KeyTooShort(secret.len()));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }

    /// Sign `claims` as a compact JWS
    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());

        jsonwebtoken::encode(&header, claims, &self.encoding)
            .map_err(|e| JwtError::Signing(e.to_string()))
    }

    /// Verify the signature and decode the payload
    ///
    /// Time-based claims are NOT validated here.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.required_spec_claims.clear();

        jsonwebtoken::decode::<T>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| JwtError::Malformed)
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("algorithm", &"HS256")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
