//! Business logic services for the SoilSync backend

pub mod chatbot;
pub mod disease;
pub mod sessions;
pub mod voice;
pub mod weather;

pub use chatbot::{ChatbotService, ConversationReply};
pub use disease::{DiseaseClassifier, DiseaseService, RandomStubClassifier};
pub use sessions::{SessionLimits, SessionStore};
pub use voice::{VoiceChatReply, VoiceChatService, VoiceUpload};
pub use weather::{WeatherPayload, WeatherService};
