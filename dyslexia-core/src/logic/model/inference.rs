//! Inference - Prediction on a single feature vector
//!
//! The model file is loaded fresh for every assessment and never cached.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::artifact::ModelArtifact;
use super::forest::label_from_proba;
use super::importance::{ranked_importances, FeatureImportance};
use super::ModelError;
use crate::logic::dataset::Label;
use crate::logic::features::FeatureVector;

/// Prediction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: Label,
    /// [P(no dyslexia), P(dyslexia)]
    pub probabilities: [f64; 2],
    /// Probability of the predicted label
    pub confidence: f64,
}

impl Prediction {
    pub fn from_proba(probabilities: [f64; 2]) -> Self {
        let label = label_from_proba(&probabilities);
        Self {
            label,
            probabilities,
            confidence: probabilities[label.index()],
        }
    }

    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Everything the result view needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub prediction: Prediction,
    pub importances: Vec<FeatureImportance>,
    pub model_version: String,
    pub inference_time_us: u64,
}

/// Predict with an already loaded model
pub fn predict(artifact: &ModelArtifact, features: &FeatureVector) -> Prediction {
    Prediction::from_proba(artifact.forest.predict_proba(features))
}

/// Load the model at `path`, predict, and rank its feature importances
pub fn assess(path: &Path, features: &FeatureVector) -> Result<Assessment, ModelError> {
    let start_time = Instant::now();

    let artifact = ModelArtifact::load(path)?;
    let prediction = predict(&artifact, features);
    let importances = ranked_importances(&artifact.forest.feature_importances());

    let inference_time_us = start_time.elapsed().as_micros() as u64;
    log::debug!(
        "Assessment: {} ({:.2}%) in {}us",
        prediction.label,
        prediction.confidence_percent(),
        inference_time_us
    );

    Ok(Assessment {
        prediction,
        importances,
        model_version: artifact.metadata.model_version,
        inference_time_us,
    })
}
