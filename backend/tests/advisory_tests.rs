//! Advisory integration tests
//!
//! Tests for fertilizer, crop and subsidy endpoints including:
//! - Set semantics of subsidy results
//! - Land size given as number or numeric string
//! - Soil-based and season-based crop advice

mod common;

use std::collections::BTreeSet;

use axum::http::StatusCode;
use proptest::prelude::*;
use serde_json::{json, Value};
use shared::{find_subsidies, recommend_crop, recommend_fertilizer, BASELINE_SCHEMES, CONSULT_EXPERT};

use common::{app, post_json, test_config};

fn as_set(value: &Value) -> BTreeSet<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[tokio::test]
    async fn test_subsidies_for_small_wheat_farmer() {
        let (status, body) = post_json(
            app(test_config()),
            "/api/subsidy/find",
            json!({"crop": "wheat", "category": "small", "land_size": "6"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let subsidies = as_set(&body["subsidies"]);
        assert!(subsidies.contains("PM-KISAN ₹6000/year"));
        assert!(subsidies.contains("Machinery & equipment subsidy"));
        assert!(subsidies.iter().any(|s| s.to_lowercase().contains("wheat")));
        for scheme in BASELINE_SCHEMES {
            assert!(subsidies.contains(scheme));
        }
        assert_eq!(body["total_schemes"].as_u64().unwrap() as usize, subsidies.len());
    }

    #[tokio::test]
    async fn test_non_numeric_land_size_rejected() {
        let (status, body) = post_json(
            app(test_config()),
            "/api/subsidy/find",
            json!({"crop": "rice", "category": "large", "land_size": "six"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Land size"));
    }

    /// Negative sizes are not an error; they just earn no land-based schemes
    #[tokio::test]
    async fn test_negative_land_size_accepted() {
        let (status, body) = post_json(
            app(test_config()),
            "/api/subsidy/find",
            json!({"crop": "maize", "category": "marginal", "land_size": -3}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let subsidies = as_set(&body["subsidies"]);
        assert!(!subsidies.contains("Machinery & equipment subsidy"));
        assert!(!subsidies.contains("Warehouse subsidy"));
        assert!(subsidies.contains("Marginal farmer support"));
        for scheme in BASELINE_SCHEMES {
            assert!(subsidies.contains(scheme));
        }
    }

    #[tokio::test]
    async fn test_crop_recommend_clay() {
        let (_, body) = post_json(
            app(test_config()),
            "/api/crop/recommend",
            json!({"soil_type": "clay", "climate": "humid", "water_availability": "high", "season": "kharif"}),
        )
        .await;

        assert_eq!(body["recommendation"]["primary_choice"], "Rice");
        assert_eq!(body["recommendation"]["recommended_crops"], json!(["Rice", "Wheat", "Sugarcane"]));
        assert_eq!(body["recommendation"]["reasoning"], "Best suited for clay soil type");
    }

    #[tokio::test]
    async fn test_fertilizer_defaults_area() {
        let (status, body) = post_json(
            app(test_config()),
            "/api/fertilizer/recommend",
            json!({"crop": "rice", "soil_type": "clay", "growth_stage": "flowering"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendation"]["fertilizer"], "Apply 25kg/ha Potash + Zinc sulphate");
    }

    #[tokio::test]
    async fn test_crop_predict() {
        let (status, body) = post_json(
            app(test_config()),
            "/api/crop/predict",
            json!({"soil_type": "loamy", "season": "Kharif", "temperature": 30.0, "rainfall": 200.0}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crops"], json!(["Rice", "Sugarcane"]));
        assert_eq!(body["confidence"], 90);
    }

    #[tokio::test]
    async fn test_crop_predict_requires_numbers() {
        let (status, body) = post_json(
            app(test_config()),
            "/api/crop/predict",
            json!({"soil_type": "loamy", "season": "rabi", "temperature": "warm", "rainfall": 10}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[test]
    fn test_pure_lookups_block_on() {
        // Outside the tokio test macro
        let body = tokio_test::block_on(async {
            post_json(app(test_config()), "/api/crop/recommend", json!({"soil_type": "peat"})).await.1
        });
        assert_eq!(body["recommendation"]["recommended_crops"], json!(["Mixed farming"]));
        assert_eq!(recommend_crop("peat", "", "", "").primary_choice, "Mixed farming");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Baseline schemes are always offered
        #[test]
        fn prop_subsidies_include_baseline(
            crop in prop::sample::select(vec!["wheat", "rice", "maize", "cotton", "vegetables", "millet"]),
            category in prop::sample::select(vec!["small", "marginal", "large", "other"]),
            land_size in 0.0f64..50.0,
        ) {
            let subsidies = find_subsidies(crop, category, land_size);
            for scheme in BASELINE_SCHEMES {
                prop_assert!(subsidies.contains(scheme));
            }
        }

        /// More land never removes a scheme
        #[test]
        fn prop_subsidies_monotonic_in_land(small in -20.0f64..20.0, extra in 0.0f64..20.0) {
            let fewer = find_subsidies("rice", "small", small);
            let more = find_subsidies("rice", "small", small + extra);
            prop_assert!(fewer.is_subset(&more));
        }

        /// Unknown crops always get the expert referral
        #[test]
        fn prop_unknown_crop_consults_expert(crop in "[a-z]{3,10}", stage in "[a-z]{3,10}") {
            prop_assume!(!["wheat", "rice", "maize", "vegetables"].contains(&crop.as_str()));
            let recommendation = recommend_fertilizer(&crop, "loamy", &stage, 1.0);
            prop_assert_eq!(recommendation.fertilizer, CONSULT_EXPERT);
        }
    }
}
