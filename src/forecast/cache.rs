use super::types::ForecastPoint;
use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_CACHE_CAPACITY: u64 = 1000;

/// Cache backend failure. Never crosses the forecast client boundary: a
/// failed read counts as a miss, a failed write is logged and swallowed.
#[derive(Error, Debug)]
#[error("cache backend failure: {0}")]
pub struct CacheError(pub String);

/// Key-value store with per-entry TTL. Get/set are assumed atomic per key;
/// concurrent writers for the same key are last-writer-wins.
#[async_trait]
pub trait CachePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<ForecastPoint>>, CacheError>;

    async fn set(
        &self,
        key: &str,
        points: Vec<ForecastPoint>,
        ttl: Duration,
    ) -> Result<(), CacheError>;
}

#[derive(Clone)]
struct Entry {
    points: Vec<ForecastPoint>,
    ttl: Duration,
}

struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-process adapter over `moka`, expiring each entry after the TTL it was
/// stored with.
pub struct MokaCache {
    inner: Cache<String, Entry>,
}

impl MokaCache {
    pub fn new(max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { inner }
    }
}

impl Default for MokaCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[async_trait]
impl CachePort for MokaCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<ForecastPoint>>, CacheError> {
        Ok(self.inner.get(key).await.map(|entry| entry.points))
    }

    async fn set(
        &self,
        key: &str,
        points: Vec<ForecastPoint>,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        self.inner
            .insert(key.to_string(), Entry { points, ttl })
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: &str) -> ForecastPoint {
        ForecastPoint {
            time: time.to_string(),
            swell_direction: 1.0,
            swell_height: 2.0,
            swell_period: 3.0,
            wave_direction: 4.0,
            wave_height: 5.0,
            wind_direction: 6.0,
            wind_speed: 7.0,
        }
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips_under_ttl() {
        let cache = MokaCache::default();
        let points = vec![point("t1"), point("t2")];

        cache
            .set("k", points.clone(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some(points));
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let cache = MokaCache::default();

        assert_eq!(cache.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_entry_expires_after_its_own_ttl() {
        let cache = MokaCache::default();

        cache
            .set("k", vec![point("t1")], Duration::from_millis(20))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(cache.get("k").await.unwrap(), None);
    }
}
