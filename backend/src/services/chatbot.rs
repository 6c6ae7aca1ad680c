//! Farming assistant chatbot
//!
//! Two independent entry points:
//! - [`ChatbotService::generate_response`] answers a single question
//! - [`ChatbotService::converse`] keeps a rolling per-session history
//!
//! Both fall back to canned replies when the language model is unavailable.

use serde::Serialize;
use shared::{
    assistant_prompt, conversation_prompt, fallback_text, ChatReply, ChatRole, ChatTurn, Language,
};
use uuid::Uuid;

use crate::config::LlmConfig;
use crate::external::{log_fallback, ChatCompletionClient, CompletionOptions, Sourced, UpstreamError};
use crate::services::sessions::SessionStore;

/// Reply within a conversation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConversationReply {
    pub reply: String,
    pub session_id: String,
}

/// Chatbot service
#[derive(Clone)]
pub struct ChatbotService {
    llm_client: Option<ChatCompletionClient>,
    sessions: SessionStore,
    single_turn: CompletionOptions,
    conversation: CompletionOptions,
}

impl ChatbotService {
    /// Create a new ChatbotService; without a client every reply is canned
    pub fn new(llm_client: Option<ChatCompletionClient>, sessions: SessionStore, config: &LlmConfig) -> Self {
        Self {
            llm_client,
            sessions,
            single_turn: CompletionOptions {
                temperature: config.temperature,
                max_tokens: Some(config.max_tokens),
            },
            conversation: CompletionOptions {
                temperature: config.conversation_temperature,
                max_tokens: None,
            },
        }
    }

    pub fn from_config(config: &LlmConfig, sessions: SessionStore) -> Self {
        Self::new(ChatCompletionClient::from_config(config), sessions, config)
    }

    /// Whether a provider key is configured
    pub fn is_configured(&self) -> bool {
        self.llm_client.is_some()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Answer a single question
    pub async fn generate_response(&self, query: &str, language: Language) -> Sourced<ChatReply> {
        let messages = [ChatTurn::system(assistant_prompt(language)), ChatTurn::user(query)];

        match self.complete(&messages, self.single_turn).await {
            Ok(text) => Sourced::live(ChatReply::live(text)),
            Err(reason) => {
                log_fallback("chatbot", &reason);
                Sourced::fallback(ChatReply::fallback(query, language), reason)
            }
        }
    }

    /// Continue (or start) a conversation
    ///
    /// The full recent history of the session is sent as context. Both the
    /// user's message and the reply are recorded, fallback replies included.
    pub async fn converse(
        &self,
        session_id: Option<String>,
        message: &str,
        language: Language,
    ) -> Sourced<ConversationReply> {
        let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

        self.sessions.add_message(&session_id, ChatRole::User, message);

        let mut messages = vec![ChatTurn::system(conversation_prompt(language))];
        messages.extend(self.sessions.get_session(&session_id));

        let reply = self.reply_or_fallback(&messages, message, language).await;
        self.sessions
            .add_message(&session_id, ChatRole::Assistant, reply.payload.clone());

        reply.map(|reply| ConversationReply { reply, session_id })
    }

    /// Answer one message without recording it in any session
    pub async fn reply_once(&self, message: &str, language: Language) -> Sourced<String> {
        let messages = [ChatTurn::system(conversation_prompt(language)), ChatTurn::user(message)];
        self.reply_or_fallback(&messages, message, language).await
    }

    async fn reply_or_fallback(&self, messages: &[ChatTurn], message: &str, language: Language) -> Sourced<String> {
        match self.complete(messages, self.conversation).await {
            Ok(text) => Sourced::live(text),
            Err(reason) => {
                log_fallback("conversation", &reason);
                Sourced::fallback(fallback_text(message, language), reason)
            }
        }
    }

    async fn complete(&self, messages: &[ChatTurn], options: CompletionOptions) -> Result<String, UpstreamError> {
        match &self.llm_client {
            Some(client) => client.complete(messages, options).await,
            None => Err(UpstreamError::MissingCredential),
        }
    }
}
