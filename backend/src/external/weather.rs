//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for current conditions and forecasts.
//! Payloads are passed through unmodified.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::UpstreamError;
use crate::config::WeatherConfig;

/// Timeout for the startup connectivity check
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// City used for the startup connectivity check
const PROBE_CITY: &str = "Mumbai";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl WeatherClient {
    /// Create a new WeatherClient against the given provider URL
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Create a client from configuration, `None` when no key is set
    pub fn from_config(config: &WeatherConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        let mut client = Self::with_base_url(api_key, config.base_url.clone());
        client.timeout = Duration::from_secs(config.timeout_secs);
        Some(client)
    }

    /// Fetch current weather conditions for a city
    pub async fn get_current_weather(&self, city: &str) -> Result<Value, UpstreamError> {
        self.fetch("weather", city, self.timeout).await
    }

    /// Fetch the 5-day / 3-hour forecast for a city
    pub async fn get_forecast(&self, city: &str) -> Result<Value, UpstreamError> {
        self.fetch("forecast", city, self.timeout).await
    }

    /// Check that the key is accepted by the provider
    pub async fn probe(&self) -> Result<(), UpstreamError> {
        self.fetch("weather", PROBE_CITY, PROBE_TIMEOUT).await.map(|_| ())
    }

    async fn fetch(&self, endpoint: &str, city: &str, timeout: Duration) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .timeout(timeout)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(UpstreamError::UpstreamStatus(response.status().as_u16()));
        }

        let data: Value = response.json().await?;
        Ok(data)
    }
}
