//! WebAssembly module for SoilSync
//!
//! Provides offline, client-side versions of the advisory lookups:
//! - Symptom-based disease detection and treatment
//! - Fertilizer, crop and subsidy advice
//! - Fallback weather readings
//!
//! Structured results are returned as JSON strings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"SoilSync offline advisor ready".into());
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Match reported symptoms; `symptoms_json` is a JSON array of strings
#[wasm_bindgen]
pub fn detect_disease_from_symptoms(symptoms_json: &str) -> Result<String, JsValue> {
    let symptoms: Vec<String> = serde_json::from_str(symptoms_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid symptoms JSON: {}", e)))?;

    let analysis = analyze_symptoms(&normalize_symptoms(&symptoms));
    let treatment = treatment_for_disease(analysis.disease);
    to_json(&serde_json::json!({ "analysis": analysis, "treatment": treatment }))
}

/// Treatment plan for a disease label
#[wasm_bindgen]
pub fn disease_treatment(label: &str) -> Result<String, JsValue> {
    to_json(&treatment_for(label))
}

#[wasm_bindgen]
pub fn fertilizer_advice(crop: &str, soil_type: &str, growth_stage: &str, area: f64) -> Result<String, JsValue> {
    to_json(&recommend_fertilizer(crop, soil_type, growth_stage, area))
}

#[wasm_bindgen]
pub fn crop_advice(soil_type: &str, climate: &str, water_availability: &str, season: &str) -> Result<String, JsValue> {
    to_json(&recommend_crop(soil_type, climate, water_availability, season))
}

/// Crops for a soil type as a JS array
#[wasm_bindgen]
pub fn crops_for_soil(soil_type: &str) -> js_sys::Array {
    recommend_crop(soil_type, "", "", "")
        .recommended_crops
        .iter()
        .map(|crop| JsValue::from_str(crop))
        .collect()
}

#[wasm_bindgen]
pub fn season_crop_prediction(soil_type: &str, season: &str, temperature: f64, rainfall: f64) -> Result<String, JsValue> {
    to_json(&predict_crop(soil_type, season, temperature, rainfall))
}

/// Eligible schemes; `land_size` is a number or numeric string as typed by the user
#[wasm_bindgen]
pub fn subsidy_schemes(crop: &str, category: &str, land_size: &str) -> Result<String, JsValue> {
    let size = parse_land_size(&serde_json::Value::String(land_size.to_string())).map_err(JsValue::from_str)?;
    let subsidies: Vec<String> = find_subsidies(crop, category, size).into_iter().collect();
    to_json(&serde_json::json!({ "subsidies": subsidies, "total_schemes": subsidies.len() }))
}

/// Fallback weather reading for a city
#[wasm_bindgen]
pub fn offline_weather(city: &str) -> Result<String, JsValue> {
    to_json(&fallback_reading(city))
}

/// Short language code (`en`, `hi`, `mr`) for a locale tag
#[wasm_bindgen]
pub fn language_code(locale: &str) -> String {
    Language::parse(locale).code().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: Result<String, JsValue>) -> serde_json::Value {
        serde_json::from_str(&json.ok().unwrap()).unwrap()
    }

    #[test]
    fn test_detect_disease_from_symptoms() {
        let result = parse(detect_disease_from_symptoms(r#"["white_powder", "Leaf_Curl"]"#));
        assert_eq!(result["analysis"]["disease"], "Powdery_Mildew");
        assert_eq!(result["analysis"]["confidence"], 90);
        assert_eq!(result["treatment"]["organic"], "Baking soda solution (5g/L)");
    }

    #[test]
    fn test_crop_advice() {
        let result = parse(crop_advice("black", "", "", ""));
        assert_eq!(result["primary_choice"], "Cotton");
    }

    #[test]
    fn test_subsidy_schemes() {
        let result = parse(subsidy_schemes("cotton", "marginal", "12"));
        let total = result["total_schemes"].as_u64().unwrap();
        assert_eq!(total as usize, result["subsidies"].as_array().unwrap().len());
        assert!(result["subsidies"].as_array().unwrap().iter().any(|s| s == "Warehouse subsidy"));
    }

    #[test]
    fn test_offline_weather() {
        let result = parse(offline_weather("Bangalore"));
        assert_eq!(result["main"]["temp"], 24);
    }

    #[test]
    fn test_language_code() {
        assert_eq!(language_code("mr-IN"), "mr");
        assert_eq!(language_code("fr"), "en");
    }
}
