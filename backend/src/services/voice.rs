//! Voice chat: speech in, text and speech out

use std::path::PathBuf;

use serde::Serialize;
use shared::Language;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::{log_fallback, SpeechClient, UpstreamError};
use crate::services::chatbot::ChatbotService;

/// Public path under which generated audio is served
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Extension used when the uploaded file name carries none
const DEFAULT_AUDIO_EXTENSION: &str = "webm";

/// Recorded audio received from the client
#[derive(Debug, Clone)]
pub struct VoiceUpload {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

/// Outcome of one voice exchange
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoiceChatReply {
    pub user_text: String,
    pub ai_reply: String,
    pub audio_url: Option<String>,
}

/// Voice chat service
#[derive(Clone)]
pub struct VoiceChatService {
    speech_client: Option<SpeechClient>,
    chatbot: ChatbotService,
    uploads_dir: PathBuf,
}

impl VoiceChatService {
    pub fn new(speech_client: Option<SpeechClient>, chatbot: ChatbotService, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            speech_client,
            chatbot,
            uploads_dir: uploads_dir.into(),
        }
    }

    /// Whether a speech provider key is configured
    pub fn is_configured(&self) -> bool {
        self.speech_client.is_some()
    }

    /// Transcribe the recording, ask the assistant, and voice the answer
    ///
    /// Transcription is required; if it fails the whole request fails. A
    /// failed synthesis only drops the audio, the text reply is still returned.
    pub async fn handle(&self, upload: VoiceUpload, language: Language) -> AppResult<VoiceChatReply> {
        let client = self
            .speech_client
            .as_ref()
            .ok_or_else(|| AppError::SpeechRecognition(UpstreamError::MissingCredential.to_string()))?;

        if upload.bytes.is_empty() {
            return Err(AppError::BadRequest("Audio file is empty".to_string()));
        }

        let saved_name = self.save_upload(&upload).await?;
        tracing::debug!(file = %saved_name, bytes = upload.bytes.len(), "voice upload saved");

        let transcript = client.transcribe(upload.bytes, &saved_name, language).await;
        self.remove_file(&saved_name).await;
        let user_text = transcript.map_err(|e| AppError::SpeechRecognition(e.to_string()))?;

        let ai_reply = self.chatbot.reply_once(&user_text, language).await.into_payload();

        let audio_url = match client.synthesize(&ai_reply).await {
            Ok(audio) => Some(self.save_speech(&audio).await?),
            Err(reason) => {
                log_fallback("speech synthesis", &reason);
                None
            }
        };

        Ok(VoiceChatReply {
            user_text,
            ai_reply,
            audio_url,
        })
    }

    async fn save_upload(&self, upload: &VoiceUpload) -> AppResult<String> {
        let extension = upload
            .file_name
            .as_deref()
            .and_then(audio_extension)
            .unwrap_or(DEFAULT_AUDIO_EXTENSION);
        let name = format!("{}.{}", Uuid::new_v4(), extension);

        self.write_file(&name, &upload.bytes).await?;
        Ok(name)
    }

    /// Store synthesized speech and return its public URL
    async fn save_speech(&self, audio: &[u8]) -> AppResult<String> {
        let name = format!("{}.mp3", Uuid::new_v4());
        self.write_file(&name, audio).await?;
        Ok(format!("{}/{}", UPLOADS_ROUTE, name))
    }

    /// Recordings are only kept until they are transcribed
    async fn remove_file(&self, name: &str) {
        if let Err(e) = tokio::fs::remove_file(self.uploads_dir.join(name)).await {
            tracing::warn!(file = %name, error = %e, "failed to remove voice upload");
        }
    }

    async fn write_file(&self, name: &str, bytes: &[u8]) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.uploads_dir).await?;
        tokio::fs::write(self.uploads_dir.join(name), bytes).await?;
        Ok(())
    }
}

/// Short alphanumeric extension of a client file name
fn audio_extension(file_name: &str) -> Option<&str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let valid = !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;
    use crate::services::sessions::SessionStore;

    #[test]
    fn test_audio_extension() {
        assert_eq!(audio_extension("clip.wav"), Some("wav"));
        assert_eq!(audio_extension("recording.webm"), Some("webm"));
        assert_eq!(audio_extension("noext"), None);
        assert_eq!(audio_extension("../../etc/passwd"), None);
        assert_eq!(audio_extension("evil.mp3/../x"), None);
    }

    #[tokio::test]
    async fn test_missing_key_is_a_request_failure() {
        let chatbot = ChatbotService::new(None, SessionStore::default(), &LlmConfig::default());
        let service = VoiceChatService::new(None, chatbot, std::env::temp_dir());
        assert!(!service.is_configured());

        let upload = VoiceUpload {
            bytes: vec![1, 2, 3],
            file_name: Some("clip.wav".to_string()),
        };
        let err = service.handle(upload, Language::English).await.unwrap_err();
        assert!(matches!(err, AppError::SpeechRecognition(_)));
    }
}
