//! Identity cache configuration.

use std::env;

/// Default identity lifetime: 3 days.
pub const DEFAULT_IDENTITY_TTL_SECONDS: i64 = 3 * 24 * 60 * 60;

/// # Environment Variables
///
/// - `REDIS_URL`: use Redis as the store when set (otherwise in-memory)
/// - `IDENTITY_TTL_SECONDS`: identity lifetime (default: `259200`, 3 days)
/// - `CACHE_PREFIX`: prefix for all cache keys (default: `staffee`)
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub redis_url: Option<String>,
    pub identity_ttl_seconds: i64,
    pub key_prefix: String,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            identity_ttl_seconds: env::var("IDENTITY_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_IDENTITY_TTL_SECONDS),
            key_prefix: env::var("CACHE_PREFIX").unwrap_or_else(|_| "staffee".into()),
        }
    }

    pub fn identity_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.identity_ttl_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            identity_ttl_seconds: DEFAULT_IDENTITY_TTL_SECONDS,
            key_prefix: "staffee".into(),
        }
    }
}
