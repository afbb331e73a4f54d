//! Prediction request/response models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dyslexia_core::{Assessment, FeatureError, FeatureImportance, FeatureVector, Label};

/// Submitted slider values (form-encoded or JSON)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureInput {
    pub reading_speed: f64,
    pub fixation_duration: f64,
    pub saccade_length: f64,
    pub phoneme_errors: f64,
    pub spelling_errors: f64,
    pub comprehension_score: f64,
}

impl FeatureInput {
    pub fn values(&self) -> [f64; 6] {
        [
            self.reading_speed,
            self.fixation_duration,
            self.saccade_length,
            self.phoneme_errors,
            self.spelling_errors,
            self.comprehension_score,
        ]
    }

    /// Finite values inside the slider bounds
    pub fn to_features(&self) -> Result<FeatureVector, FeatureError> {
        let features = FeatureVector::from_values(self.values())?;
        features.check_bounds()?;
        Ok(features)
    }
}

impl From<FeatureVector> for FeatureInput {
    fn from(features: FeatureVector) -> Self {
        let [reading_speed, fixation_duration, saccade_length, phoneme_errors, spelling_errors, comprehension_score] =
            *features.as_array();
        Self {
            reading_speed,
            fixation_duration,
            saccade_length,
            phoneme_errors,
            spelling_errors,
            comprehension_score,
        }
    }
}

impl Default for FeatureInput {
    fn default() -> Self {
        FeatureVector::defaults().into()
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub request_id: Uuid,
    pub label: Label,
    pub headline: &'static str,
    /// [P(no dyslexia), P(dyslexia)]
    pub probabilities: [f64; 2],
    pub confidence: f64,
    pub importances: Vec<FeatureImportance>,
    pub model_version: String,
    pub inference_time_us: u64,
}

impl PredictionResponse {
    pub fn new(request_id: Uuid, assessment: Assessment) -> Self {
        let prediction = assessment.prediction;
        Self {
            request_id,
            label: prediction.label,
            headline: prediction.label.headline(),
            probabilities: prediction.probabilities,
            confidence: prediction.confidence,
            importances: assessment.importances,
            model_version: assessment.model_version,
            inference_time_us: assessment.inference_time_us,
        }
    }
}
