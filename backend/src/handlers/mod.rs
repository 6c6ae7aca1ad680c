//! HTTP handlers for the SoilSync API

pub mod advisory;
pub mod chatbot;
pub mod disease;
pub mod health;
pub mod voice;
pub mod weather;

use axum::extract::FromRequest;

use crate::error::AppError;

pub use advisory::{find_subsidies, predict_crop, recommend_crop, recommend_fertilizer};
pub use chatbot::{chat, chatbot_query};
pub use disease::{detect_from_image, detect_from_symptoms};
pub use health::health_check;
pub use voice::voice_chat;
pub use weather::{current_weather, weather_forecast};

/// JSON body extractor whose rejections render as [`AppError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Status marker carried by the farming-tool responses
pub(crate) const SUCCESS: &str = "success";
