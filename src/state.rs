use std::sync::Arc;

use tracing::info;

use staffee_cache::{CacheConfig, IdentityCache, KeyValueStore, MemoryStore, RedisStore};
use staffee_client::BackendClient;
use staffee_config::{BackendConfig, CorsConfig, EmailConfig, MediaConfig, SessionConfig};

use crate::middleware::route_guard::RouteTable;

#[derive(Clone, Debug)]
pub struct AppState {
    pub session_config: SessionConfig,
    pub backend: BackendClient,
    pub identity_cache: IdentityCache,
    pub email_config: EmailConfig,
    pub cors_config: CorsConfig,
    pub media_config: MediaConfig,
    pub routes: RouteTable,
}

/// Builds the identity store: Redis when `REDIS_URL` is set, otherwise an
/// in-process map.
pub async fn init_identity_cache(config: &CacheConfig) -> anyhow::Result<IdentityCache> {
    let store: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(url) => {
            info!("Identity cache backed by Redis");
            Arc::new(RedisStore::new(url).await?)
        }
        None => {
            info!("Identity cache backed by process memory");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(IdentityCache::with_prefix(
        store,
        config.identity_ttl(),
        &config.key_prefix,
    ))
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    Ok(AppState {
        session_config: SessionConfig::from_env(),
        backend: BackendClient::new(&BackendConfig::from_env())?,
        identity_cache: init_identity_cache(&CacheConfig::from_env()).await?,
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        media_config: MediaConfig::from_env(),
        routes: RouteTable::default(),
    })
}
