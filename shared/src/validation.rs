//! Validation utilities for SoilSync request inputs

use serde_json::Value;

/// Longest accepted client-supplied session identifier
pub const MAX_SESSION_ID_LEN: usize = 128;

/// Parse a land size given either as a JSON number or a numeric string
///
/// Any finite value is accepted; sizes below zero simply qualify for no
/// land-based schemes.
pub fn parse_land_size(value: &Value) -> Result<f64, &'static str> {
    let size = match value {
        Value::Number(n) => n.as_f64().ok_or("Land size must be a number")?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| "Land size must be a number")?,
        Value::Null => return Err("Land size is required"),
        _ => return Err("Land size must be a number"),
    };

    if !size.is_finite() {
        return Err("Land size must be a number");
    }
    Ok(size)
}

/// Validate a client-supplied chat session identifier
pub fn validate_session_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("Session id cannot be empty");
    }
    if id.len() > MAX_SESSION_ID_LEN {
        return Err("Session id is too long");
    }
    if id.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err("Session id contains invalid characters");
    }
    Ok(())
}

/// Normalise reported symptom names: trimmed, lowercase, empty entries dropped
pub fn normalize_symptoms(symptoms: &[String]) -> Vec<String> {
    symptoms
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_land_size_number_and_string() {
        assert_eq!(parse_land_size(&json!(6)), Ok(6.0));
        assert_eq!(parse_land_size(&json!(2.5)), Ok(2.5));
        assert_eq!(parse_land_size(&json!("6")), Ok(6.0));
        assert_eq!(parse_land_size(&json!(" 10.0 ")), Ok(10.0));
    }

    #[test]
    fn test_land_size_negative_accepted() {
        assert_eq!(parse_land_size(&json!(-1)), Ok(-1.0));
        assert_eq!(parse_land_size(&json!("-2.5")), Ok(-2.5));
    }

    #[test]
    fn test_land_size_invalid() {
        assert!(parse_land_size(&json!("six")).is_err());
        assert!(parse_land_size(&json!(null)).is_err());
        assert!(parse_land_size(&json!([1])).is_err());
        assert!(parse_land_size(&json!("NaN")).is_err());
    }

    #[test]
    fn test_session_id_rules() {
        assert!(validate_session_id("abc-123").is_ok());
        assert!(validate_session_id("").is_err());
        assert!(validate_session_id("has space").is_err());
        assert!(validate_session_id(&"x".repeat(MAX_SESSION_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_normalize_symptoms() {
        let raw = vec![" Brown_Spots ".to_string(), "".to_string(), "yellowing".to_string()];
        assert_eq!(normalize_symptoms(&raw), vec!["brown_spots", "yellowing"]);
    }
}
