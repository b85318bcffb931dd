//! Response store for memoized upstream requests.
//!
//! Provides a [`ResponseCache`] trait with two implementations:
//! - [`InMemoryCache`] - Process-local map, the default
//! - [`RedisCache`] - Optional persistent store

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::InMemoryCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, ResponseCache};
