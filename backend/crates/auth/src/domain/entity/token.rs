//! Credential Token Claims
//!
//! Payload of the signed bearer token. Times are Unix seconds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account id
    pub sub: Uuid,
    pub email: String,
    /// Issued at
    pub iat: i64,
    /// Expires at
    pub exp: i64,
}

impl TokenClaims {
    /// Expired once `now` reaches `exp`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            iat: 100,
            exp: 200,
        };

        assert!(!claims.is_expired_at(199));
        assert!(claims.is_expired_at(200));
        assert!(claims.is_expired_at(201));
    }
}
