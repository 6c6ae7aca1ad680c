//! Advisory tables for fertilizer, crop choice and government schemes

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// Fertilizer
// ============================================================================

/// Fertilizer plan for a crop at a growth stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FertilizerRecommendation {
    pub fertilizer: String,
    pub application_method: String,
    pub precautions: String,
}

/// Returned when no schedule exists for the crop/stage
pub const CONSULT_EXPERT: &str = "Consult agricultural expert";

/// (crop, [(growth stage, advice)])
const FERTILIZER_SCHEDULES: &[(&str, [(&str, &str); 4])] = &[
    (
        "wheat",
        [
            ("initial", "Apply 120kg/ha Urea + 60kg/ha DAP"),
            ("vegetative", "Top dress with 40kg/ha Urea"),
            ("flowering", "Apply 20kg/ha Potash + Micronutrients"),
            ("maturity", "No fertilizer needed, prepare for harvest"),
        ],
    ),
    (
        "rice",
        [
            ("initial", "Apply 100kg/ha NPK (10:26:26) + 50kg/ha Urea"),
            ("vegetative", "Top dress with 60kg/ha Urea in 2 splits"),
            ("flowering", "Apply 25kg/ha Potash + Zinc sulphate"),
            ("maturity", "Ensure proper drainage, no fertilizer"),
        ],
    ),
    (
        "maize",
        [
            ("initial", "Apply 150kg/ha NPK (12:32:16)"),
            ("vegetative", "Side dress with 80kg/ha Urea"),
            ("flowering", "Apply 30kg/ha Potash"),
            ("maturity", "Monitor for harvest readiness"),
        ],
    ),
    (
        "vegetables",
        [
            ("initial", "Apply compost 5t/ha + NPK (19:19:19) 100kg/ha"),
            ("vegetative", "Weekly liquid fertilizer application"),
            ("flowering", "High phosphorus fertilizer + Calcium"),
            ("maturity", "Reduce fertilizer, focus on quality"),
        ],
    ),
];

/// Fertilizer advice for a crop and growth stage
///
/// Soil type and area are accepted for interface compatibility; the schedule
/// depends only on crop and stage.
pub fn recommend_fertilizer(
    crop: &str,
    _soil_type: &str,
    growth_stage: &str,
    _area: f64,
) -> FertilizerRecommendation {
    let advice = FERTILIZER_SCHEDULES
        .iter()
        .find(|(name, _)| *name == crop)
        .and_then(|(_, stages)| stages.iter().find(|(stage, _)| *stage == growth_stage))
        .map(|(_, advice)| *advice)
        .unwrap_or(CONSULT_EXPERT);

    FertilizerRecommendation {
        fertilizer: advice.to_string(),
        application_method: "Apply in morning or evening, avoid midday heat".to_string(),
        precautions: "Test soil pH before application, ensure adequate moisture".to_string(),
    }
}

// ============================================================================
// Crop selection
// ============================================================================

/// Crops suited to a soil type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropRecommendation {
    pub recommended_crops: Vec<String>,
    pub primary_choice: String,
    pub reasoning: String,
    pub additional_tips: String,
}

const SOIL_CROPS: &[(&str, [&str; 3])] = &[
    ("clay", ["Rice", "Wheat", "Sugarcane"]),
    ("sandy", ["Bajra", "Groundnut", "Watermelon"]),
    ("loamy", ["Maize", "Cotton", "Soybean"]),
    ("black", ["Cotton", "Soybean", "Sunflower"]),
];

/// Recommend crops for a soil type
///
/// Climate, water availability and season do not influence the result.
pub fn recommend_crop(
    soil_type: &str,
    _climate: &str,
    _water_availability: &str,
    _season: &str,
) -> CropRecommendation {
    let crops: Vec<String> = SOIL_CROPS
        .iter()
        .find(|(soil, _)| *soil == soil_type)
        .map(|(_, crops)| crops.iter().map(|c| c.to_string()).collect())
        .unwrap_or_else(|| vec!["Mixed farming".to_string()]);

    CropRecommendation {
        primary_choice: crops[0].clone(),
        recommended_crops: crops,
        reasoning: format!("Best suited for {} soil type", soil_type),
        additional_tips: "Consider crop rotation and market demand".to_string(),
    }
}

/// Season-based crop prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropPrediction {
    pub crops: Vec<String>,
    pub confidence: u32,
    pub reason: String,
}

/// Predict suitable crops from season, temperature (°C) and rainfall (mm)
pub fn predict_crop(_soil_type: &str, season: &str, temperature: f64, rainfall: f64) -> CropPrediction {
    let (crops, confidence, reason): (&[&str], u32, &str) = match season.to_lowercase().as_str() {
        "kharif" if rainfall > 150.0 => (
            &["Rice", "Sugarcane"],
            90,
            "High rainfall during Kharif season favors water-intensive crops.",
        ),
        "kharif" => (
            &["Cotton", "Maize"],
            70,
            "Moderate rainfall suitable for cotton and maize.",
        ),
        "rabi" if temperature < 25.0 => (
            &["Wheat", "Barley"],
            85,
            "Cool temperature during Rabi supports wheat growth.",
        ),
        "rabi" => (&["Mustard"], 70, "Warmer conditions favor oilseed crops."),
        "zaid" => (
            &["Watermelon", "Cucumber"],
            70,
            "Zaid crops grow well in hot summer conditions.",
        ),
        _ => (
            &["Millets"],
            70,
            "Default recommendation based on climate resilience.",
        ),
    };

    CropPrediction {
        crops: crops.iter().map(|c| c.to_string()).collect(),
        confidence,
        reason: reason.to_string(),
    }
}

// ============================================================================
// Subsidies
// ============================================================================

/// Farmer landholding category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FarmerCategory {
    Small,
    Marginal,
    Large,
}

impl FarmerCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "small" => Some(FarmerCategory::Small),
            "marginal" => Some(FarmerCategory::Marginal),
            "large" => Some(FarmerCategory::Large),
            _ => None,
        }
    }

    fn schemes(&self) -> [&'static str; 2] {
        match self {
            FarmerCategory::Small => ["PM-KISAN ₹6000/year", "Small farmer credit scheme"],
            FarmerCategory::Marginal => ["Marginal farmer support", "Free soil testing"],
            FarmerCategory::Large => ["Farm mechanization subsidy", "Agri-infrastructure support"],
        }
    }
}

const CROP_SCHEMES: &[(&str, [&str; 2])] = &[
    ("wheat", ["50% subsidy on certified wheat seeds", "Wheat procurement at MSP"]),
    ("rice", ["Rice seed subsidy up to 75%", "Paddy procurement guarantee"]),
    ("maize", ["Hybrid maize seed subsidy", "Maize processing unit support"]),
    ("cotton", ["Cotton seed subsidy 50%", "Cotton technology mission"]),
    ("vegetables", ["Vegetable cluster development", "Cold storage subsidy"]),
];

/// Schemes available to every farmer
pub const BASELINE_SCHEMES: [&str; 3] = ["Soil health card", "Crop insurance scheme", "Kisan credit card"];

/// Land size (hectares) from which equipment schemes apply
pub const MEDIUM_HOLDING_HECTARES: f64 = 5.0;

/// Land size (hectares) from which infrastructure schemes apply
pub const LARGE_HOLDING_HECTARES: f64 = 10.0;

/// Collect every scheme a farmer qualifies for
///
/// The result is a set; callers must not rely on ordering.
pub fn find_subsidies(crop: &str, category: &str, land_size: f64) -> BTreeSet<String> {
    let mut schemes: BTreeSet<&str> = BTreeSet::new();

    if let Some(category) = FarmerCategory::parse(category) {
        schemes.extend(category.schemes());
    }

    if land_size >= MEDIUM_HOLDING_HECTARES {
        schemes.extend(["Machinery & equipment subsidy", "Drip irrigation subsidy"]);
    }
    if land_size >= LARGE_HOLDING_HECTARES {
        schemes.extend(["Custom hiring center", "Warehouse subsidy"]);
    }

    if let Some((_, crop_schemes)) = CROP_SCHEMES.iter().find(|(name, _)| *name == crop) {
        schemes.extend(crop_schemes.iter());
    }

    schemes.extend(BASELINE_SCHEMES);

    schemes.into_iter().map(String::from).collect()
}
