use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-field measurements keyed by the upstream data-source name
/// (e.g. "noaa"). An absent source key means the model has no reading
/// for that hour.
pub type SourceValues = HashMap<String, f64>;

/// One normalized hourly observation. Immutable once constructed; the
/// `time` string is passed through from upstream unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub time: String,
    pub swell_direction: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub wave_direction: f64,
    pub wave_height: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
}

/// Raw `hours` payload as StormGlass returns it. Missing keys deserialize
/// as empty maps so partially populated records parse and get filtered
/// instead of failing the whole response.
#[derive(Debug, Clone, Deserialize)]
pub struct StormGlassResponse {
    #[serde(default)]
    pub hours: Vec<StormGlassHour>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StormGlassHour {
    pub time: String,
    pub swell_direction: SourceValues,
    pub swell_height: SourceValues,
    pub swell_period: SourceValues,
    pub wave_direction: SourceValues,
    pub wave_height: SourceValues,
    pub wind_direction: SourceValues,
    pub wind_speed: SourceValues,
}
