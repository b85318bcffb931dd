//! Response cache trait and error types.

use crate::domain::entities::MemoizedResponse;
use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Fetch-once store for memoized responses, keyed by the exact request URL.
///
/// Entries never expire and are never invalidated: once `put` succeeds, `get` for the
/// same key returns that value for the lifetime of the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::InMemoryCache`] - process-local map (default)
/// - [`crate::infrastructure::cache::RedisCache`] - persistent Redis-backed store
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Looks up the response stored for `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(response))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get(&self, key: &str) -> CacheResult<Option<MemoizedResponse>>;

    /// Stores `value` under `key`, overwriting any previous entry.
    ///
    /// Overwrites only happen when concurrent first requests race, and both writers
    /// store the same response for the same URL.
    async fn put(&self, key: &str, value: MemoizedResponse) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;

    /// Human-readable backend name for health reporting.
    fn backend(&self) -> &'static str;
}
