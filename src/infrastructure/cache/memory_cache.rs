//! Process-local cache implementation.

use super::service::{CacheError, CacheResult, ResponseCache};
use crate::domain::entities::MemoizedResponse;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory response store backed by a `HashMap`.
///
/// Unbounded: entries live as long as the cache itself.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, MemoizedResponse>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        debug!("Using InMemoryCache");
        Self::default()
    }

    /// Number of stored responses.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResponseCache for InMemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<MemoizedResponse>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| CacheError::OperationError(format!("Lock poisoned: {}", e)))?;

        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: MemoizedResponse) -> CacheResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| CacheError::OperationError(format!("Lock poisoned: {}", e)))?;

        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
