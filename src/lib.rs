//! Caching acquisition client for StormGlass marine forecasts.
//!
//! Given a coordinate pair this crate returns a normalized hourly series of
//! swell, wave and wind measurements, served from a TTL cache when fresh and
//! fetched from the upstream API otherwise. It is a library component for a
//! higher-level service; authentication flows, routing and durable storage
//! live with the consumer.

pub mod config;
pub mod forecast;

pub use config::Config;
pub use forecast::cache::{CacheError, CachePort, MokaCache};
pub use forecast::client::{cache_key, ForecastClient};
pub use forecast::types::ForecastPoint;
pub use forecast::ForecastError;
