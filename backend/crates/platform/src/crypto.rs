//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
///
/// Accepts the standard alphabet, with or without padding, so secrets
/// produced by `openssl rand -base64 32` and by URL-unfriendly tooling both
/// load.
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let s = s.trim();
    general_purpose::STANDARD
        .decode(s)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
        assert_ne!(random_bytes(32), bytes);
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"medal locker signing key";
        let encoded = to_base64(data);
        assert_eq!(from_base64(&encoded).unwrap(), data);
    }

    #[test]
    fn test_base64_unpadded_and_whitespace() {
        assert_eq!(from_base64("aGk").unwrap(), b"hi");
        assert_eq!(from_base64(" aGk=\n").unwrap(), b"hi");
        assert!(from_base64("!!!").is_err());
    }
}
