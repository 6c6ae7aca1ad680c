//! HTTP handler for voice chat

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use shared::Language;

use crate::error::{AppError, AppResult};
use crate::services::{VoiceChatReply, VoiceUpload};
use crate::AppState;

/// Accepts multipart fields `audio` (file) and `language` (text, default English)
pub async fn voice_chat(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<VoiceChatReply>> {
    let mut multipart = multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let mut upload = None;
    let mut language = Language::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                upload = Some(VoiceUpload {
                    bytes: bytes.to_vec(),
                    file_name,
                });
            }
            Some("language") => language = Language::parse(&field.text().await?),
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::BadRequest("Missing audio file".to_string()))?;
    let reply = state.voice.handle(upload, language).await?;

    Ok(Json(reply))
}
