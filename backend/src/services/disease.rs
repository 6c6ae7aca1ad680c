//! Crop disease detection

use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};
use shared::{
    analyze_symptoms, normalize_symptoms, treatment_for_disease, Disease, DiseasePrediction, SymptomAnalysis,
    Treatment,
};

/// Image-based disease classifier
pub trait DiseaseClassifier: Send + Sync {
    /// Classify an encoded leaf image
    fn predict(&self, image: &str) -> DiseasePrediction;
}

/// Stand-in classifier that ignores the image and picks a label at random
///
/// No model is bundled; this keeps the endpoint contract stable until one is.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStubClassifier;

impl DiseaseClassifier for RandomStubClassifier {
    fn predict(&self, _image: &str) -> DiseasePrediction {
        stub_prediction(&mut rand::thread_rng())
    }
}

/// Uniform label, confidence in [75, 95] to one decimal place
pub fn stub_prediction<R: Rng>(rng: &mut R) -> DiseasePrediction {
    let disease = Disease::ALL.choose(&mut *rng).copied().unwrap_or(Disease::Healthy);
    let confidence: f64 = rng.gen_range(75.0..=95.0);

    DiseasePrediction {
        disease,
        confidence: (confidence * 10.0).round() / 10.0,
        processing_time: "1.2s".to_string(),
    }
}

/// Disease service
#[derive(Clone)]
pub struct DiseaseService {
    classifier: Arc<dyn DiseaseClassifier>,
}

impl Default for DiseaseService {
    fn default() -> Self {
        Self::new(Arc::new(RandomStubClassifier))
    }
}

impl DiseaseService {
    pub fn new(classifier: Arc<dyn DiseaseClassifier>) -> Self {
        Self { classifier }
    }

    /// Classify an image and attach the matching treatment plan
    pub fn detect_from_image(&self, image: &str) -> (DiseasePrediction, Treatment) {
        let prediction = self.classifier.predict(image);
        tracing::debug!(
            disease = %prediction.disease,
            confidence = prediction.confidence,
            "image classified"
        );
        let treatment = treatment_for_disease(prediction.disease);
        (prediction, treatment)
    }

    /// Match reported symptoms and attach the matching treatment plan
    pub fn detect_from_symptoms(&self, symptoms: &[String]) -> (SymptomAnalysis, Treatment) {
        let analysis = analyze_symptoms(&normalize_symptoms(symptoms));
        let treatment = treatment_for_disease(analysis.disease);
        (analysis, treatment)
    }
}
