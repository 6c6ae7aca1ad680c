//! Speech-to-text and text-to-speech client
//!
//! Uses the OpenAI-compatible `/audio/transcriptions` and `/audio/speech`
//! endpoints.

use std::time::Duration;

use reqwest::{multipart, Client, StatusCode};
use serde::{Deserialize, Serialize};
use shared::Language;

use super::UpstreamError;
use crate::config::SpeechConfig;

/// Audio API client
#[derive(Clone)]
pub struct SpeechClient {
    client: Client,
    api_key: String,
    base_url: String,
    stt_model: String,
    tts_model: String,
    voice: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
}

impl SpeechClient {
    /// Create a client from configuration, `None` when no key is set
    pub fn from_config(config: &SpeechConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            stt_model: config.stt_model.clone(),
            tts_model: config.tts_model.clone(),
            voice: config.voice.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Transcribe recorded audio
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
        language: Language,
    ) -> Result<String, UpstreamError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(audio).file_name(file_name.to_string()))
            .text("model", self.stt_model.clone())
            .text("language", language.code());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(UpstreamError::UpstreamStatus(response.status().as_u16()));
        }

        let data: TranscriptionResponse = response.json().await?;
        Ok(data.text.trim().to_string())
    }

    /// Synthesize speech, returning MP3 bytes
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, UpstreamError> {
        let url = format!("{}/audio/speech", self.base_url);
        let request = SpeechRequest {
            model: &self.tts_model,
            input: text,
            voice: &self.voice,
            response_format: "mp3",
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(UpstreamError::UpstreamStatus(response.status().as_u16()));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(UpstreamError::InvalidPayload("empty audio".to_string()));
        }
        Ok(audio.to_vec())
    }
}
