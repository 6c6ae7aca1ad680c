//! Route definitions for the SoilSync API

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        // Farming tools
        .nest("/weather", weather_routes())
        .nest("/disease", disease_routes())
        .route("/subsidy/find", post(handlers::find_subsidies))
        .route("/fertilizer/recommend", post(handlers::recommend_fertilizer))
        .nest("/crop", crop_routes())
        .route("/chatbot/query", post(handlers::chatbot_query))
        // Conversational assistant
        .route("/chat", post(handlers::chat))
        .route("/voice-chat", post(handlers::voice_chat))
        // Leaf photos and recordings exceed axum's default body limit
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", post(handlers::current_weather))
        .route("/forecast", post(handlers::weather_forecast))
}

fn disease_routes() -> Router<AppState> {
    Router::new()
        .route("/detect-image", post(handlers::detect_from_image))
        .route("/detect-symptoms", post(handlers::detect_from_symptoms))
}

fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/recommend", post(handlers::recommend_crop))
        .route("/predict", post(handlers::predict_crop))
}
