//! TTL-checked identity accessor.
//!
//! Expiry is lazy: an identity is only dropped when a read finds it older
//! than the TTL. An identity exactly `ttl` old is still returned.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument, warn};

use staffee_models::CachedIdentity;

use crate::keys;
use crate::store::{CacheError, KeyValueStore};

#[derive(Clone, Debug)]
pub struct IdentityCache {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
    prefix: String,
}

impl IdentityCache {
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self::with_prefix(store, ttl, "staffee")
    }

    pub fn with_prefix(store: Arc<dyn KeyValueStore>, ttl: Duration, prefix: &str) -> Self {
        Self {
            store,
            ttl,
            prefix: prefix.to_string(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Writes `identity` and stamps it with the current time.
    pub async fn save(&self, identity: &CachedIdentity) -> Result<(), CacheError> {
        self.save_at(identity, Utc::now()).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id))]
    pub async fn save_at(
        &self,
        identity: &CachedIdentity,
        now: DateTime<Utc>,
    ) -> Result<(), CacheError> {
        let json = serde_json::to_string(identity)?;

        self.store
            .set(&keys::identity(&self.prefix, &identity.id), json)
            .await?;
        self.store
            .set(
                &keys::identity_timestamp(&self.prefix, &identity.id),
                now.timestamp_millis().to_string(),
            )
            .await?;

        debug!("Identity cached");
        Ok(())
    }

    /// Reads the identity for `user_id`, treating stale entries as absent.
    pub async fn get(&self, user_id: &str) -> Result<Option<CachedIdentity>, CacheError> {
        self.get_at(user_id, Utc::now()).await
    }

    #[instrument(skip(self))]
    pub async fn get_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<CachedIdentity>, CacheError> {
        let Some(json) = self.store.get(&keys::identity(&self.prefix, user_id)).await? else {
            return Ok(None);
        };

        let written_at = self
            .store
            .get(&keys::identity_timestamp(&self.prefix, user_id))
            .await?
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(DateTime::from_timestamp_millis);

        let Some(written_at) = written_at else {
            // No readable write time: cannot prove freshness.
            debug!("Identity without timestamp, discarding");
            self.remove(user_id).await?;
            return Ok(None);
        };

        if now - written_at > self.ttl {
            debug!(age_secs = (now - written_at).num_seconds(), "Identity expired");
            self.remove(user_id).await?;
            return Ok(None);
        }

        match serde_json::from_str(&json) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable cached identity");
                self.remove(user_id).await?;
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: &str) -> Result<(), CacheError> {
        self.store
            .remove(&keys::identity(&self.prefix, user_id))
            .await?;
        self.store
            .remove(&keys::identity_timestamp(&self.prefix, user_id))
            .await?;
        Ok(())
    }

    /// Flags the cached identity as verified and re-stamps it. Does nothing
    /// when no fresh identity is cached.
    pub async fn mark_email_verified(&self, user_id: &str) -> Result<bool, CacheError> {
        match self.get(user_id).await? {
            Some(mut identity) => {
                identity.verify_email = Some(true);
                self.save(&identity).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
