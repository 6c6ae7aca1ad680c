//! HTTP handlers for weather endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{Forecast, WeatherReading};

use super::{ApiJson, SUCCESS};
use crate::error::AppResult;
use crate::services::WeatherPayload;
use crate::AppState;

/// Request body naming a city
#[derive(Debug, Deserialize)]
pub struct CityRequest {
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentWeatherResponse {
    pub status: &'static str,
    pub weather: WeatherPayload<WeatherReading>,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub status: &'static str,
    pub forecast: WeatherPayload<Forecast>,
}

/// Current weather for a city
pub async fn current_weather(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CityRequest>,
) -> AppResult<Json<CurrentWeatherResponse>> {
    let weather = state.weather.get_current_weather(&input.city).await;
    tracing::debug!(city = %input.city, live = weather.is_live(), "current weather served");

    Ok(Json(CurrentWeatherResponse {
        status: SUCCESS,
        weather: weather.into_payload(),
    }))
}

/// Five-day forecast for a city
pub async fn weather_forecast(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CityRequest>,
) -> AppResult<Json<ForecastResponse>> {
    let forecast = state.weather.get_forecast(&input.city).await;
    tracing::debug!(city = %input.city, live = forecast.is_live(), "forecast served");

    Ok(Json(ForecastResponse {
        status: SUCCESS,
        forecast: forecast.into_payload(),
    }))
}
