//! In-process response cache backed by `moka`.

use super::service::{CacheResult, CacheService, CachedResponse};
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    response: CachedResponse,
    ttl: Duration,
}

/// Expires each entry after the TTL it was stored with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Bounded in-memory cache; the default backend when Redis is not configured.
pub struct MemoryCache {
    inner: Cache<String, Entry>,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` responses.
    pub fn new(max_entries: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(PerEntryTtl)
            .build();

        Self { inner }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<CachedResponse>> {
        match self.inner.get(key).await {
            Some(entry) => {
                debug!("Cache HIT: {}", key);
                Ok(Some(entry.response))
            }
            None => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, response: &CachedResponse, ttl: Duration) -> CacheResult<()> {
        self.inner
            .insert(
                key.to_string(),
                Entry {
                    response: response.clone(),
                    ttl,
                },
            )
            .await;
        debug!("Cache SET: {} (TTL: {}s)", key, ttl.as_secs());
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        self.inner.invalidate(key).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CachedResponse {
        CachedResponse {
            content_type: "application/json".to_string(),
            body: "[]".to_string(),
        }
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new(10);

        cache
            .set("GET /api/hospitals", &sample(), Duration::from_secs(60))
            .await
            .unwrap();

        let hit = cache.get("GET /api/hospitals").await.unwrap();
        assert_eq!(hit, Some(sample()));
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let cache = MemoryCache::new(10);

        cache
            .set("GET /api/hospitals", &sample(), Duration::from_secs(60))
            .await
            .unwrap();
        cache.invalidate("GET /api/hospitals").await.unwrap();

        assert!(cache.get("GET /api/hospitals").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = MemoryCache::new(10);

        cache
            .set("GET /docs", &sample(), Duration::from_millis(50))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(cache.get("GET /docs").await.unwrap().is_none());
    }
}
