//! Chat models and canned replies

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Speaker of a chat turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Reply returned by the single-turn assistant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub text: String,
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

/// Follow-up features offered with every reply
pub const SUGGESTIONS: [&str; 3] = ["Disease Detection", "Weather Forecast", "Fertilizer Advice"];

/// Confidence reported for provider-generated replies
pub const LIVE_CONFIDENCE: f64 = 0.95;

/// Confidence reported for canned replies
pub const FALLBACK_CONFIDENCE: f64 = 0.9;

impl ChatReply {
    /// Reply produced by the language model
    pub fn live(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: LIVE_CONFIDENCE,
            suggestions: suggestions(),
        }
    }

    /// Canned reply used when the language model is unavailable
    pub fn fallback(query: &str, language: Language) -> Self {
        Self {
            text: fallback_text(query, language),
            confidence: FALLBACK_CONFIDENCE,
            suggestions: suggestions(),
        }
    }
}

pub fn suggestions() -> Vec<String> {
    SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// System prompt for the single-turn assistant
pub fn assistant_prompt(language: Language) -> &'static str {
    match language {
        Language::English => "You are SoilSync AI, a farming assistant. Provide helpful advice about crops, diseases, weather, and farming techniques in English.",
        Language::Hindi => "आप SoilSync AI हैं, एक कृषि सहायक। फसलों, रोगों, मौसम और कृषि तकनीकों के बारे में हिंदी में सहायक सलाह प्रदान करें।",
        Language::Marathi => "तुम्ही SoilSync AI आहात, एक शेती सहाय्यक. पिके, रोग, हवामान आणि शेती तंत्रांबद्दल मराठीत उपयुक्त सल्ला द्या.",
    }
}

/// Base instruction for multi-turn conversations
pub const CONVERSATION_PROMPT: &str = "You are SoilSync AI, an agricultural assistant for Indian farmers.
Always respond in English unless the user explicitly asks for Hindi or Marathi.
If the user asks in Hindi, reply in Hindi.
If the user asks in Marathi, reply in Marathi.
Keep responses simple and farmer-friendly.";

/// System instruction for multi-turn conversations
pub fn conversation_prompt(language: Language) -> String {
    format!("{} Reply in {}.", CONVERSATION_PROMPT, language.name())
}

/// Canned reply embedding the caller's query
pub fn fallback_text(query: &str, language: Language) -> String {
    match language {
        Language::English => format!(
            "I understand you're asking about: '{}'. As your AI farming assistant, I can help with crop diseases, weather forecasts, fertilizer advice, and farming techniques. What specific help do you need?",
            query
        ),
        Language::Hindi => format!(
            "मैं समझता हूं कि आप पूछ रहे हैं: '{}'। आपके AI कृषि सहायक के रूप में, मैं फसल रोगों, मौसम पूर्वानुमान, उर्वरक सलाह और कृषि तकनीकों में मदद कर सकता हूं।",
            query
        ),
        Language::Marathi => format!(
            "मला समजते की तुम्ही विचारत आहात: '{}'. तुमच्या AI शेती सहाय्यक म्हणून, मी पीक रोग, हवामान अंदाज, खत सल्ला आणि शेती तंत्रांमध्ये मदत करू शकतो.",
            query
        ),
    }
}
