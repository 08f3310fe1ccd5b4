//! Cache service trait and error types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// A successful GET response captured for replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub content_type: String,
    pub body: String,
}

/// Trait for caching rendered responses by route key.
///
/// Implementations must be thread-safe and fail open: a backend fault is
/// logged and reported as a miss so the request falls through to storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache with per-entry TTL
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached response for `key`, if present and fresh.
    async fn get(&self, key: &str) -> CacheResult<Option<CachedResponse>>;

    /// Stores `response` under `key` for at most `ttl`.
    async fn set(&self, key: &str, response: &CachedResponse, ttl: Duration) -> CacheResult<()>;

    /// Removes a cached entry.
    ///
    /// Used when a write makes a cached read stale.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
