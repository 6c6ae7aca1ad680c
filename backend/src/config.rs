//! Configuration management for the SoilSync backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with SOILSYNC__ prefix
//!
//! Provider keys may also be given through the conventional
//! `OPENWEATHER_API_KEY`, `GROQ_API_KEY` and `OPENAI_API_KEY` variables.
//! A missing key is not an error: the matching adapter serves fallback data.

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Chat-completion provider configuration
    pub llm: LlmConfig,

    /// Speech-to-text / text-to-speech provider configuration
    pub speech: SpeechConfig,

    /// Chat session limits
    pub sessions: SessionConfig,

    /// Directory holding the front-end files
    pub static_dir: PathBuf,

    /// Directory for uploaded and generated audio
    pub uploads_dir: PathBuf,

    /// Largest accepted voice upload in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,

    /// OpenWeatherMap base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    /// API key for the OpenAI-compatible chat endpoint
    pub api_key: Option<String>,

    /// Base URL, `/chat/completions` is appended
    pub base_url: String,

    /// Model name
    pub model: String,

    /// Sampling temperature for single questions
    pub temperature: f32,

    /// Sampling temperature for multi-turn conversations
    pub conversation_temperature: f32,

    /// Output token limit for single questions
    pub max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    /// API key for the OpenAI-compatible audio endpoints
    pub api_key: Option<String>,

    /// Base URL, `/audio/transcriptions` and `/audio/speech` are appended
    pub base_url: String,

    /// Transcription model
    pub stt_model: String,

    /// Speech synthesis model
    pub tts_model: String,

    /// Synthesis voice
    pub voice: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// Turns kept per session
    pub max_turns: usize,

    /// Sessions kept before the least recently used is dropped
    pub max_sessions: usize,

    /// Idle time after which a session is dropped
    pub idle_ttl_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SOILSYNC_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SOILSYNC__ prefix)
            .add_source(
                Environment::with_prefix("SOILSYNC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;

        config.weather.api_key =
            non_empty(config.weather.api_key).or_else(|| env_key("OPENWEATHER_API_KEY"));
        config.llm.api_key = non_empty(config.llm.api_key).or_else(|| env_key("GROQ_API_KEY"));
        config.speech.api_key =
            non_empty(config.speech.api_key).or_else(|| env_key("OPENAI_API_KEY"));

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn env_key(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.7,
            conversation_temperature: 0.4,
            max_tokens: 150,
            timeout_secs: 10,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            stt_model: "whisper-1".to_string(),
            tts_model: "tts-1".to_string(),
            voice: "alloy".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: 6,
            max_sessions: 10_000,
            idle_ttl_secs: 3600,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            llm: LlmConfig::default(),
            speech: SpeechConfig::default(),
            sessions: SessionConfig::default(),
            static_dir: PathBuf::from("static"),
            uploads_dir: PathBuf::from("uploads"),
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}
