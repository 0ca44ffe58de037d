//! Startup configuration fetch
//!
//! The configuration document lives at `/config.json` next to the served
//! assets; see [`taskdeck_shared::AppConfig`] for its shape.

use gloo_net::http::Request;
pub use taskdeck_shared::{ApiConfig, AppConfig, HostedAuthConfig};

/// Why the configuration document could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid config document: {0}")]
    Invalid(String),
}

/// Fetch `/config.json` from the serving origin
pub async fn fetch_config() -> Result<AppConfig, ConfigError> {
    let response = Request::get("/config.json")
        .send()
        .await
        .map_err(|e| ConfigError::RequestFailed(e.to_string()))?;

    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }

    response
        .json::<AppConfig>()
        .await
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
