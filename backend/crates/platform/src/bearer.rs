//! Bearer Token Header Parsing
//!
//! Extracts the credential from `Authorization: Bearer <token>`.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Why no bearer token could be read from the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Missing Authorization header")]
    Missing,

    /// Header present but not `Bearer <token>` (other scheme, empty token,
    /// non-ASCII bytes)
    #[error("Malformed Authorization header")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// The scheme is matched exactly (`Bearer`, single space). Surrounding
/// whitespace around the token is ignored; an empty token is malformed.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .ok_or(BearerError::Malformed)?;

    if token.is_empty() || token.contains(' ') {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}

/// Build an `Authorization` header value for a token
pub fn bearer_value(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), Err(BearerError::Missing));
    }

    #[test]
    fn test_malformed_header() {
        assert_eq!(
            extract_bearer(&headers_with("Basic dXNlcjpwdw==")),
            Err(BearerError::Malformed)
        );
        assert_eq!(extract_bearer(&headers_with("Bearer ")), Err(BearerError::Malformed));
        assert_eq!(extract_bearer(&headers_with("Bearer")), Err(BearerError::Malformed));
        assert_eq!(
            extract_bearer(&headers_with("bearer abc")),
            Err(BearerError::Malformed)
        );
        assert_eq!(
            extract_bearer(&headers_with("Bearer a b")),
            Err(BearerError::Malformed)
        );
    }

    #[test]
    fn test_bearer_value_roundtrip() {
        let value = bearer_value("tok");
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&value).unwrap());
        assert_eq!(extract_bearer(&headers), Ok("tok"));
    }
}
