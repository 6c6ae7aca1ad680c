//! Crop disease models, symptom matching and treatment advice

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Diseases the assistant can report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Disease {
    Healthy,
    #[serde(rename = "Leaf_Blight")]
    LeafBlight,
    #[serde(rename = "Powdery_Mildew")]
    PowderyMildew,
    #[serde(rename = "Rust_Disease")]
    RustDisease,
}

impl Disease {
    pub const ALL: [Disease; 4] = [
        Disease::Healthy,
        Disease::LeafBlight,
        Disease::PowderyMildew,
        Disease::RustDisease,
    ];

    /// Wire label, e.g. `Leaf_Blight`
    pub fn label(&self) -> &'static str {
        match self {
            Disease::Healthy => "Healthy",
            Disease::LeafBlight => "Leaf_Blight",
            Disease::PowderyMildew => "Powdery_Mildew",
            Disease::RustDisease => "Rust_Disease",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Disease::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of image-based detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseasePrediction {
    pub disease: Disease,
    pub confidence: f64,
    pub processing_time: String,
}

/// Result of symptom-based detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomAnalysis {
    pub disease: Disease,
    pub confidence: u32,
    pub matched_symptoms: usize,
}

/// Recommended treatment for a disease
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Treatment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<String>,
    pub fertilizer: String,
    pub prevention: String,
}

/// Symptom pairs and the disease they indicate, in matching order
pub const SYMPTOM_TABLE: [([&str; 2], Disease); 3] = [
    (["brown_spots", "yellowing"], Disease::LeafBlight),
    (["white_powder", "leaf_curl"], Disease::PowderyMildew),
    (["orange_spots", "leaf_drop"], Disease::RustDisease),
];

/// Match reported symptoms against [`SYMPTOM_TABLE`]
///
/// The entry sharing the most symptoms wins; on a tie the earlier entry is
/// kept. With no overlap at all the plant is reported healthy.
pub fn analyze_symptoms<S: AsRef<str>>(symptoms: &[S]) -> SymptomAnalysis {
    let reported: HashSet<&str> = symptoms.iter().map(|s| s.as_ref()).collect();

    let mut best = Disease::Healthy;
    let mut max_score = 0;

    for (pair, disease) in SYMPTOM_TABLE.iter() {
        let score = pair.iter().filter(|s| reported.contains(*s)).count();
        if score > max_score {
            max_score = score;
            best = *disease;
        }
    }

    let confidence = if max_score > 0 {
        (60 + 15 * max_score as u32).min(95)
    } else {
        75
    };

    SymptomAnalysis {
        disease: best,
        confidence,
        matched_symptoms: max_score,
    }
}

/// Treatment advice for a disease label; unknown labels get the healthy-crop advice
pub fn treatment_for(label: &str) -> Treatment {
    match Disease::from_label(label) {
        Some(disease) => treatment_for_disease(disease),
        None => healthy_treatment(),
    }
}

pub fn treatment_for_disease(disease: Disease) -> Treatment {
    match disease {
        Disease::LeafBlight => Treatment {
            chemical: Some("Copper oxychloride 50% WP @ 2g/L".to_string()),
            organic: Some("Neem oil spray (5ml/L) + Trichoderma".to_string()),
            maintenance: None,
            fertilizer: "Balanced NPK 19:19:19 @ 2g/L".to_string(),
            prevention: "Improve drainage, avoid overhead irrigation".to_string(),
        },
        Disease::PowderyMildew => Treatment {
            chemical: Some("Wettable sulfur 80% WP @ 2g/L".to_string()),
            organic: Some("Baking soda solution (5g/L)".to_string()),
            maintenance: None,
            fertilizer: "Reduce nitrogen, increase potassium".to_string(),
            prevention: "Ensure good air circulation".to_string(),
        },
        // No dedicated rust entry is authored; the healthy-crop advice applies
        Disease::Healthy | Disease::RustDisease => healthy_treatment(),
    }
}

fn healthy_treatment() -> Treatment {
    Treatment {
        chemical: None,
        organic: None,
        maintenance: Some("Continue current care practices".to_string()),
        fertilizer: "Regular balanced NPK".to_string(),
        prevention: "Weekly health monitoring".to_string(),
    }
}
