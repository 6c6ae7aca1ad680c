//! External API integrations
//!
//! Adapters never fall back on their own: they report an [`UpstreamError`]
//! and the calling service decides what to serve instead.

pub mod llm;
pub mod speech;
pub mod weather;

pub use llm::{ChatCompletionClient, CompletionOptions};
pub use speech::SpeechClient;
pub use weather::WeatherClient;

use thiserror::Error;

/// Why an upstream call produced no usable payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("invalid upstream payload: {0}")]
    InvalidPayload(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::InvalidPayload(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// Where a payload came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback(UpstreamError),
}

/// A payload tagged with its origin
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub payload: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn live(payload: T) -> Self {
        Self {
            payload,
            source: DataSource::Live,
        }
    }

    pub fn fallback(payload: T, reason: UpstreamError) -> Self {
        Self {
            payload,
            source: DataSource::Fallback(reason),
        }
    }

    pub fn is_live(&self) -> bool {
        self.source == DataSource::Live
    }

    /// Reason the fallback was used, if it was
    pub fn fallback_reason(&self) -> Option<&UpstreamError> {
        match &self.source {
            DataSource::Live => None,
            DataSource::Fallback(reason) => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            payload: f(self.payload),
            source: self.source,
        }
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Log why a fallback is being served
pub(crate) fn log_fallback(service: &str, reason: &UpstreamError) {
    match reason {
        UpstreamError::MissingCredential => {
            tracing::debug!(service, "no API key configured, serving fallback")
        }
        other => tracing::warn!(service, reason = %other, "upstream unavailable, serving fallback"),
    }
}
