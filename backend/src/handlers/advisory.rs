//! HTTP handlers for fertilizer, crop and subsidy advice
//!
//! All lookups are pure table functions from the shared crate.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{CropPrediction, CropRecommendation, FertilizerRecommendation};

use super::{ApiJson, SUCCESS};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SubsidyRequest {
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub category: String,
    /// Hectares, as a number or numeric string
    #[serde(default)]
    pub land_size: Value,
}

#[derive(Debug, Serialize)]
pub struct SubsidyResponse {
    pub status: &'static str,
    pub subsidies: Vec<String>,
    pub total_schemes: usize,
}

/// Find government schemes a farmer is eligible for
pub async fn find_subsidies(ApiJson(input): ApiJson<SubsidyRequest>) -> AppResult<Json<SubsidyResponse>> {
    let land_size = shared::parse_land_size(&input.land_size)
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

    let subsidies: Vec<String> = shared::find_subsidies(&input.crop, &input.category, land_size)
        .into_iter()
        .collect();

    Ok(Json(SubsidyResponse {
        status: SUCCESS,
        total_schemes: subsidies.len(),
        subsidies,
    }))
}

fn default_area() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct FertilizerRequest {
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub growth_stage: String,
    #[serde(default = "default_area")]
    pub area: f64,
}

#[derive(Debug, Serialize)]
pub struct FertilizerResponse {
    pub status: &'static str,
    pub recommendation: FertilizerRecommendation,
}

/// Fertilizer schedule for a crop at its growth stage
pub async fn recommend_fertilizer(
    ApiJson(input): ApiJson<FertilizerRequest>,
) -> AppResult<Json<FertilizerResponse>> {
    let recommendation =
        shared::recommend_fertilizer(&input.crop, &input.soil_type, &input.growth_stage, input.area);

    Ok(Json(FertilizerResponse {
        status: SUCCESS,
        recommendation,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CropRecommendRequest {
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub water_availability: String,
    #[serde(default)]
    pub season: String,
}

#[derive(Debug, Serialize)]
pub struct CropRecommendResponse {
    pub status: &'static str,
    pub recommendation: CropRecommendation,
}

/// Crops suited to a soil type
pub async fn recommend_crop(
    ApiJson(input): ApiJson<CropRecommendRequest>,
) -> AppResult<Json<CropRecommendResponse>> {
    let recommendation = shared::recommend_crop(
        &input.soil_type,
        &input.climate,
        &input.water_availability,
        &input.season,
    );

    Ok(Json(CropRecommendResponse {
        status: SUCCESS,
        recommendation,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CropPredictRequest {
    pub soil_type: String,
    pub season: String,
    pub temperature: f64,
    pub rainfall: f64,
}

/// Season and climate based crop prediction
pub async fn predict_crop(ApiJson(input): ApiJson<CropPredictRequest>) -> AppResult<Json<CropPrediction>> {
    Ok(Json(shared::predict_crop(
        &input.soil_type,
        &input.season,
        input.temperature,
        input.rainfall,
    )))
}
