//! Weather service: live provider data with per-city fallback

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use serde_json::Value;
use shared::{
    fallback_reading, synthetic_forecast, DayVariation, Forecast, WeatherReading, FORECAST_CONDITIONS,
    FORECAST_DAYS,
};
use tokio::sync::OnceCell;

use crate::config::WeatherConfig;
use crate::external::{log_fallback, Sourced, UpstreamError, WeatherClient};

/// Provider payload, or our own fallback in the same shape
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum WeatherPayload<T> {
    Live(Value),
    Fallback(T),
}

/// Weather service
#[derive(Clone)]
pub struct WeatherService {
    weather_client: Option<WeatherClient>,
    reachable: Arc<OnceCell<bool>>,
}

impl WeatherService {
    /// Create a new WeatherService; without a client every call is served from fallback data
    pub fn new(weather_client: Option<WeatherClient>) -> Self {
        Self {
            weather_client,
            reachable: Arc::new(OnceCell::new()),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(WeatherClient::from_config(config))
    }

    /// Whether a provider key is configured
    pub fn is_configured(&self) -> bool {
        self.weather_client.is_some()
    }

    /// Current conditions for a city
    pub async fn get_current_weather(&self, city: &str) -> Sourced<WeatherPayload<WeatherReading>> {
        let result = match &self.weather_client {
            Some(client) => client.get_current_weather(city).await,
            None => Err(UpstreamError::MissingCredential),
        };

        match result {
            Ok(data) => Sourced::live(WeatherPayload::Live(data)),
            Err(reason) => {
                log_fallback("weather", &reason);
                Sourced::fallback(WeatherPayload::Fallback(fallback_reading(city)), reason)
            }
        }
    }

    /// Five-day forecast for a city
    pub async fn get_forecast(&self, city: &str) -> Sourced<WeatherPayload<Forecast>> {
        let result = match &self.weather_client {
            Some(client) => client.get_forecast(city).await,
            None => Err(UpstreamError::MissingCredential),
        };

        match result {
            Ok(data) => Sourced::live(WeatherPayload::Live(data)),
            Err(reason) => {
                log_fallback("forecast", &reason);
                let forecast = fallback_forecast(&mut rand::thread_rng(), Utc::now());
                Sourced::fallback(WeatherPayload::Fallback(forecast), reason)
            }
        }
    }

    /// Check provider connectivity; `false` when unconfigured or unreachable
    ///
    /// Only the first call reaches the provider, later calls report its result.
    pub async fn probe(&self) -> bool {
        let Some(client) = &self.weather_client else {
            return false;
        };

        *self
            .reachable
            .get_or_init(|| async {
                match client.probe().await {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!("Weather API check failed: {}", e);
                        false
                    }
                }
            })
            .await
    }
}

/// Randomly perturbed forecast for the days after `now`
pub fn fallback_forecast<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Forecast {
    let variations: Vec<DayVariation> = (0..FORECAST_DAYS)
        .map(|_| DayVariation {
            temp_offset: rng.gen_range(-3..=5),
            condition: FORECAST_CONDITIONS.choose(&mut *rng).copied().unwrap_or("Clear"),
            humidity: rng.gen_range(50..=80),
            wind: rng.gen_range(3..=12),
        })
        .collect();

    synthetic_forecast(now, &variations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_fallback_forecast_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let forecast = fallback_forecast(&mut rng, Utc::now());

        assert_eq!(forecast.list.len(), 5);
        for entry in &forecast.list {
            assert!((25..=33).contains(&entry.main.temp));
            assert_eq!(entry.main.temp_max - entry.main.temp, 3);
            assert_eq!(entry.main.temp - entry.main.temp_min, 2);
            assert!((50..=80).contains(&entry.main.humidity));
            assert!((3..=12).contains(&entry.wind.speed));
            assert!(FORECAST_CONDITIONS.contains(&entry.weather[0].main.as_str()));
        }
    }

    #[test]
    fn test_seeded_forecast_is_reproducible() {
        let now = Utc::now();
        let a = fallback_forecast(&mut StdRng::seed_from_u64(42), now);
        let b = fallback_forecast(&mut StdRng::seed_from_u64(42), now);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_unconfigured_service_serves_fallback() {
        let service = WeatherService::new(None);
        assert!(!service.is_configured());

        let current = service.get_current_weather("Pune").await;
        assert_eq!(current.fallback_reason(), Some(&UpstreamError::MissingCredential));
        match current.payload {
            WeatherPayload::Fallback(reading) => assert_eq!(reading.main.temp, 26),
            WeatherPayload::Live(_) => panic!("expected fallback"),
        }

        assert!(!service.probe().await);
    }
}
