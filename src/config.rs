use serde::{Deserialize, Serialize};
use std::env;

/// The seven StormGlass measurements a forecast point is built from.
pub const DEFAULT_FORECAST_PARAMS: [&str; 7] = [
    "swellDirection",
    "swellHeight",
    "swellPeriod",
    "waveDirection",
    "waveHeight",
    "windDirection",
    "windSpeed",
];

pub const DEFAULT_SOURCE: &str = "noaa";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub stormglass_api_token: String,
    pub stormglass_base_url: String,
    pub stormglass_source: String,
    pub forecast_params: Vec<String>,
    pub cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            stormglass_api_token: env::var("STORMGLASS_API_TOKEN")
                .map_err(|_| anyhow::anyhow!("STORMGLASS_API_TOKEN not set"))?,
            stormglass_base_url: env::var("STORMGLASS_BASE_URL")
                .unwrap_or_else(|_| "https://api.stormglass.io/v2".to_string()),
            stormglass_source: env::var("STORMGLASS_SOURCE")
                .unwrap_or_else(|_| DEFAULT_SOURCE.to_string()),
            forecast_params: forecast_params(env::var("STORMGLASS_PARAMS").ok()),
            cache_ttl_secs: env::var("FORECAST_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
        })
    }
}

/// Parses the params CSV, dropping empty segments. An unset, empty or
/// all-whitespace list falls back to the defaults so a malformed override
/// can never produce an empty `params=` query upstream.
fn forecast_params(csv: Option<String>) -> Vec<String> {
    csv.map(|csv| {
        csv.split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
    })
    .filter(|params| !params.is_empty())
    .unwrap_or_else(|| DEFAULT_FORECAST_PARAMS.iter().map(|p| p.to_string()).collect())
}
