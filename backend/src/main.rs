//! SoilSync - Backend Server

use std::net::SocketAddr;

use soilsync_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "soilsync_server=debug,soilsync_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting SoilSync Server");
    tracing::info!("Environment: {}", config.environment);

    let state = AppState::from_config(config.clone());

    // Report provider status; missing providers are served from fallback data
    if state.weather.probe().await {
        tracing::info!("Weather API: connected");
    } else if state.weather.is_configured() {
        tracing::warn!("Weather API: unreachable, serving fallback data");
    } else {
        tracing::info!("Weather API: not configured, serving fallback data");
    }
    tracing::info!(
        "Chat API: {}",
        if state.chatbot.is_configured() { "configured" } else { "not configured, serving canned replies" }
    );
    tracing::info!(
        "Speech API: {}",
        if state.voice.is_configured() { "configured" } else { "not configured, voice chat disabled" }
    );

    tokio::fs::create_dir_all(&config.uploads_dir).await?;

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
