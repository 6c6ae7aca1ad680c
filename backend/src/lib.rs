//! SoilSync - farming assistant backend
//!
//! Weather, crop disease detection, fertilizer/crop/subsidy advice and a
//! multilingual chat assistant for Indian farmers. Every external provider
//! is optional; without one the matching endpoints serve fallback data.

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;

use external::SpeechClient;
use services::{
    voice::UPLOADS_ROUTE, ChatbotService, DiseaseService, SessionLimits, SessionStore, VoiceChatService,
    WeatherService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub chatbot: ChatbotService,
    pub disease: DiseaseService,
    pub voice: VoiceChatService,
}

impl AppState {
    /// Wire every service from configuration
    pub fn from_config(config: Config) -> Self {
        let sessions = SessionStore::new(SessionLimits::from(&config.sessions));
        let chatbot = ChatbotService::from_config(&config.llm, sessions);
        let voice = VoiceChatService::new(
            SpeechClient::from_config(&config.speech),
            chatbot.clone(),
            config.uploads_dir.clone(),
        );

        Self {
            weather: WeatherService::from_config(&config.weather),
            chatbot,
            disease: DiseaseService::default(),
            voice,
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads = ServeDir::new(&state.config.uploads_dir);
    let frontend = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes(state.config.max_upload_bytes))
        .nest_service(UPLOADS_ROUTE, uploads)
        .fallback_service(frontend)
        .layer(from_fn(middleware::reject_hidden_paths))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
