//! HTTP handlers for the assistant chat endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{ChatReply, Language};
use validator::Validate;

use super::{ApiJson, SUCCESS};
use crate::error::{AppError, AppResult};
use crate::services::ConversationReply;
use crate::AppState;

/// Single-question request
#[derive(Debug, Deserialize, Validate)]
pub struct ChatbotQuery {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    /// Locale tag such as `hi-IN`; English when absent
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct ChatbotQueryResponse {
    pub status: &'static str,
    pub response: ChatReply,
}

/// Answer one farming question
pub async fn chatbot_query(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ChatbotQuery>,
) -> AppResult<Json<ChatbotQueryResponse>> {
    input.validate()?;

    let reply = state.chatbot.generate_response(&input.query, input.language).await;
    tracing::debug!(language = %input.language, live = reply.is_live(), "chatbot query answered");

    Ok(Json(ChatbotQueryResponse {
        status: SUCCESS,
        response: reply.into_payload(),
    }))
}

/// Conversation request
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Continue a conversation, starting a session when none is given
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ChatRequest>,
) -> AppResult<Json<ConversationReply>> {
    input.validate()?;
    if input.message.trim().is_empty() {
        return Err(AppError::ValidationError("Message cannot be empty".to_string()));
    }
    if let Some(id) = &input.session_id {
        shared::validate_session_id(id).map_err(|msg| AppError::ValidationError(msg.to_string()))?;
    }

    let reply = state
        .chatbot
        .converse(input.session_id, &input.message, input.language)
        .await;
    tracing::debug!(session_id = %reply.payload.session_id, live = reply.is_live(), "chat turn completed");

    Ok(Json(reply.into_payload()))
}
