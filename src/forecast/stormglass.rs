use super::types::*;
use super::ForecastError;
use crate::config::Config;
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const POINT_PATH: &str = "/weather/point";

pub struct StormGlassClient {
    client: Client,
    config: Config,
}

impl StormGlassClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("SurfForecastClient/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetches the raw hourly forecast for a coordinate pair and normalizes
    /// it into flat points. No range validation on the coordinates here;
    /// that belongs to the caller.
    pub async fn fetch_points(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ForecastPoint>, ForecastError> {
        let raw = self.fetch_from_api(lat, lng).await?;
        Ok(normalize(&raw, &self.config.stormglass_source))
    }

    async fn fetch_from_api(&self, lat: f64, lng: f64) -> Result<StormGlassResponse, ForecastError> {
        let url = format!("{}{}", self.config.stormglass_base_url, POINT_PATH);
        // StormGlass wants an explicit window; one day ahead is all the
        // consumers of this client ever render.
        let end = (Utc::now() + ChronoDuration::days(1)).timestamp();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("params", self.config.forecast_params.join(",")),
                ("source", self.config.stormglass_source.clone()),
                ("end", end.to_string()),
            ])
            .header("Authorization", &self.config.stormglass_api_token)
            .send()
            .await
            .map_err(|err| ForecastError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForecastError::Response {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|err| ForecastError::Request(err.to_string()))?;
        let raw: StormGlassResponse =
            serde_json::from_value(json).map_err(|err| ForecastError::Request(err.to_string()))?;
        Ok(raw)
    }
}

/// Projects raw hours down to flat points for the given source, dropping
/// incomplete records. Order-preserving, pure, never fails: partial upstream
/// data should shrink the series, not error the whole request.
pub fn normalize(raw: &StormGlassResponse, source: &str) -> Vec<ForecastPoint> {
    raw.hours
        .iter()
        .filter(|hour| is_complete_hour(hour, source))
        .map(|hour| ForecastPoint {
            time: hour.time.clone(),
            swell_direction: source_value(&hour.swell_direction, source),
            swell_height: source_value(&hour.swell_height, source),
            swell_period: source_value(&hour.swell_period, source),
            wave_direction: source_value(&hour.wave_direction, source),
            wave_height: source_value(&hour.wave_height, source),
            wind_direction: source_value(&hour.wind_direction, source),
            wind_speed: source_value(&hour.wind_speed, source),
        })
        .collect()
}

/// An hour counts only when it has a timestamp and every measurement carries
/// a non-zero reading for `source`. A genuine zero reading is
/// indistinguishable from an absent one here; upstream reports gaps as
/// missing keys, so zero is treated as missing too.
pub fn is_complete_hour(hour: &StormGlassHour, source: &str) -> bool {
    !hour.time.is_empty()
        && [
            &hour.swell_direction,
            &hour.swell_height,
            &hour.swell_period,
            &hour.wave_direction,
            &hour.wave_height,
            &hour.wind_direction,
            &hour.wind_speed,
        ]
        .iter()
        .all(|values| has_reading(values, source))
}

fn has_reading(values: &SourceValues, source: &str) -> bool {
    values.get(source).map_or(false, |v| *v != 0.0)
}

fn source_value(values: &SourceValues, source: &str) -> f64 {
    values.get(source).copied().unwrap_or(0.0)
}
