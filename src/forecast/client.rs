use super::cache::CachePort;
use super::stormglass::StormGlassClient;
use super::types::ForecastPoint;
use super::ForecastError;
use crate::config::Config;
use std::sync::Arc;
use std::time::Duration;

/// Cache-aside forecast client: serves cached points when present, otherwise
/// fetches from StormGlass and populates the cache for the next caller.
pub struct ForecastClient {
    stormglass: StormGlassClient,
    cache: Arc<dyn CachePort>,
    cache_ttl: Duration,
}

impl ForecastClient {
    pub fn new(config: Config, cache: Arc<dyn CachePort>) -> Self {
        let cache_ttl = Duration::from_secs(config.cache_ttl_secs);

        Self {
            stormglass: StormGlassClient::new(config),
            cache,
            cache_ttl,
        }
    }

    /// Returns the normalized forecast series for a coordinate pair.
    ///
    /// Upstream errors propagate unchanged. Cache errors never do: a failed
    /// read is a miss, a failed write still returns the fresh data. Two
    /// concurrent misses for the same key may both fetch and both write;
    /// the entry is derived data, so last-writer-wins is fine.
    pub async fn fetch_points(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ForecastPoint>, ForecastError> {
        let key = cache_key(lat, lng);

        match self.cache.get(&key).await {
            Ok(Some(points)) if !points.is_empty() => {
                tracing::debug!("Forecast cache hit for {}", key);
                return Ok(points);
            }
            Ok(_) => {
                tracing::debug!("Forecast cache miss for {}", key);
            }
            Err(err) => {
                tracing::warn!("Forecast cache read failed for {}, fetching upstream: {}", key, err);
            }
        }

        let points = self.stormglass.fetch_points(lat, lng).await?;

        if let Err(err) = self
            .cache
            .set(&key, points.clone(), self.cache_ttl)
            .await
        {
            tracing::warn!("Forecast cache write failed for {}: {}", key, err);
        }

        Ok(points)
    }
}

/// Stable cache key for a coordinate pair. Fixed precision keeps float
/// formatting from ever producing two keys for the same coordinates.
pub fn cache_key(lat: f64, lng: f64) -> String {
    format!("forecast_points_{:.4}_{:.4}", lat, lng)
}
