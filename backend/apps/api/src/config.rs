//! Server Configuration
//!
//! Read once from the environment at startup. Parsing goes through a lookup
//! closure so defaults and failures can be tested without touching the
//! process environment.

use std::time::Duration;

use auth::AuthConfig;
use platform::jwt::{JwtError, MIN_KEY_LENGTH};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub frontend_origins: Vec<String>,
    /// Decoded signing key; `None` means a random key per process
    pub jwt_secret: Option<Vec<u8>>,
    pub token_ttl: Duration,
    pub password_pepper: Option<Vec<u8>>,
}

impl ServerConfig {
    /// Read from the process environment; release builds insist on `JWT_SECRET`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), !cfg!(debug_assertions))
    }

    pub fn from_lookup<F>(lookup: F, require_secret: bool) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let jwt_secret = match get("JWT_SECRET") {
            Some(encoded) => Some(decode_secret(&encoded)?),
            None if require_secret => return Err(ConfigError::Missing("JWT_SECRET")),
            None => None,
        };

        let ttl_hours = parse_or("TOKEN_TTL_HOURS", get("TOKEN_TTL_HOURS"), DEFAULT_TOKEN_TTL_HOURS)?;
        if ttl_hours == 0 {
            return Err(ConfigError::Invalid {
                var: "TOKEN_TTL_HOURS",
                reason: "must be at least 1".to_string(),
            });
        }

        let password_pepper = get("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(Self {
            database_url,
            port,
            max_connections,
            frontend_origins,
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_hours.saturating_mul(3600)),
            password_pepper,
        })
    }

    /// Build the immutable auth configuration shared by all handlers
    pub fn auth_config(&self) -> Result<AuthConfig, JwtError> {
        let config = match &self.jwt_secret {
            Some(secret) => AuthConfig::new(secret)?,
            None => {
                tracing::warn!("JWT_SECRET not set, using a random signing key");
                AuthConfig::development()?
            }
        };

        Ok(config
            .with_token_ttl(self.token_ttl)
            .with_pepper(self.password_pepper.clone()))
    }
}

fn parse_or<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn decode_secret(encoded: &str) -> Result<Vec<u8>, ConfigError> {
    let secret = platform::crypto::from_base64(encoded).map_err(|e| ConfigError::Invalid {
        var: "JWT_SECRET",
        reason: format!("not valid base64: {e}"),
    })?;

    if secret.len() < MIN_KEY_LENGTH {
        return Err(ConfigError::Invalid {
            var: "JWT_SECRET",
            reason: format!(
                "decodes to {} bytes, need at least {}",
                secret.len(),
                MIN_KEY_LENGTH
            ),
        });
    }

    Ok(secret)
}
