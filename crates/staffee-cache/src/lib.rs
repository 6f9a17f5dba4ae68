//! # Staffee Cache
//!
//! Short-lived mirror of the signed-in user's identity.
//!
//! The cache exists for one purpose: deciding whether a dashboard should
//! keep prompting for email verification across page reloads. It is never
//! consulted for authorization.
//!
//! - [`store`]: the [`KeyValueStore`] seam and the in-memory store
//! - [`redis`]: Redis-backed store for multi-instance deployments
//! - [`identity`]: [`IdentityCache`], the TTL-checked accessor
//! - [`keys`]: cache key generation
//! - [`config`]: configuration from environment variables
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use staffee_cache::{IdentityCache, MemoryStore};
//!
//! let cache = IdentityCache::new(Arc::new(MemoryStore::new()), Duration::days(3));
//! cache.save(&identity).await?;
//! let cached = cache.get(&identity.id).await?;
//! ```

pub mod config;
pub mod identity;
pub mod keys;
pub mod redis;
pub mod store;

pub use config::CacheConfig;
pub use identity::IdentityCache;
pub use crate::redis::RedisStore;
pub use store::{CacheError, KeyValueStore, MemoryStore};
