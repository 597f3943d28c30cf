pub mod cache;
pub mod client;
pub mod stormglass;
pub mod types;

use thiserror::Error;

/// Failures on the upstream fetch path. Cache trouble never surfaces through
/// this type; a broken cache degrades to always-fetch (see `client`).
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Upstream could not be reached at all (connect, timeout, DNS, decode).
    #[error("unexpected error when trying to communicate to StormGlass: {0}")]
    Request(String),
    /// Upstream was reached and explicitly rejected the request.
    #[error("error returned by the StormGlass service: {body} (status {status})")]
    Response { status: u16, body: String },
}
