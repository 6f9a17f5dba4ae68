//! Session cookie configuration.
//!
//! # Environment Variables
//!
//! - `SESSION_SECRET`: HMAC secret used to sign session tokens
//! - `SESSION_EXPIRY_SECONDS`: lifetime of a session (default: 30 days)
//! - `SESSION_COOKIE_SECURE`: set the `Secure` cookie attribute (default: true)

use std::env;

/// Default session lifetime: 30 days.
pub const DEFAULT_SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub expiry_seconds: i64,
    pub cookie_secure: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            expiry_seconds: env::var("SESSION_EXPIRY_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SESSION_EXPIRY_SECONDS),
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-change-in-production".to_string(),
            expiry_seconds: DEFAULT_SESSION_EXPIRY_SECONDS,
            cookie_secure: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_is_thirty_days() {
        let config = SessionConfig::default();
        assert_eq!(config.expiry_seconds, 2_592_000);
        assert!(config.cookie_secure);
    }
}
