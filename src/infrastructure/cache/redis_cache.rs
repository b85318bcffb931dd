//! Redis-backed response store.

use super::service::{CacheError, CacheResult, ResponseCache};
use crate::domain::entities::MemoizedResponse;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Persistent response store for deployments that want memoization to survive
/// restarts.
///
/// Entries are written without expiry. All operations are fail-open: errors are logged
/// and surface as misses or no-op writes, so callers fall back to the network.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "resp:".to_string(),
        })
    }

    fn build_key(&self, url: &str) -> String {
        format!("{}{}", self.key_prefix, url)
    }
}

#[async_trait]
impl ResponseCache for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<MemoizedResponse>> {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&redis_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<MemoizedResponse>(&raw) {
                Ok(response) => {
                    debug!("Cache HIT: {}", key);
                    Ok(Some(response))
                }
                Err(e) => {
                    warn!("Undecodable cache entry for {}: {}", key, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, value: MemoizedResponse) -> CacheResult<()> {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        let payload = serde_json::to_string(&value)
            .map_err(|e| CacheError::OperationError(format!("Failed to encode entry: {}", e)))?;

        match conn.set::<_, _, ()>(&redis_key, payload).await {
            Ok(_) => {
                debug!("Cache SET: {}", key);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
