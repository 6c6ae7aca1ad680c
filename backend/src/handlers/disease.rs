//! HTTP handlers for crop disease detection

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{DiseasePrediction, SymptomAnalysis, Treatment};

use super::{ApiJson, SUCCESS};
use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DetectImageRequest {
    /// Encoded leaf photo; the stub classifier never inspects it
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Deserialize)]
pub struct DetectSymptomsRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageDetectionResponse {
    pub status: &'static str,
    pub prediction: DiseasePrediction,
    pub treatment: Treatment,
}

#[derive(Debug, Serialize)]
pub struct SymptomDetectionResponse {
    pub status: &'static str,
    pub analysis: SymptomAnalysis,
    pub treatment: Treatment,
}

/// Detect disease from a leaf image
pub async fn detect_from_image(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<DetectImageRequest>,
) -> AppResult<Json<ImageDetectionResponse>> {
    let (prediction, treatment) = state.disease.detect_from_image(&input.image);

    Ok(Json(ImageDetectionResponse {
        status: SUCCESS,
        prediction,
        treatment,
    }))
}

/// Detect disease from reported symptoms
pub async fn detect_from_symptoms(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<DetectSymptomsRequest>,
) -> AppResult<Json<SymptomDetectionResponse>> {
    let (analysis, treatment) = state.disease.detect_from_symptoms(&input.symptoms);

    Ok(Json(SymptomDetectionResponse {
        status: SUCCESS,
        analysis,
        treatment,
    }))
}
