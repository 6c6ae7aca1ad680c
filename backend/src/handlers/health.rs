//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub weather_api: String,
    pub llm_api: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Weather reachability is checked once per process; the LLM is reported by configuration
    let weather_api = if !state.weather.is_configured() {
        "not configured"
    } else if state.weather.probe().await {
        "connected"
    } else {
        "unreachable"
    };

    let llm_api = if state.chatbot.is_configured() {
        "configured"
    } else {
        "not configured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        weather_api: weather_api.to_string(),
        llm_api: llm_api.to_string(),
    })
}
