//! Model Module - Random Forest Training & Inference
//!
//! Trees and the forest live in `tree` / `forest`; `artifact` persists a
//! trained forest with its metadata; `inference` and `importance` serve the
//! presentation layer; `metrics` scores a held-out split.

pub mod tree;
pub mod forest;
pub mod artifact;
pub mod inference;
pub mod importance;
pub mod metrics;

use std::path::PathBuf;
use thiserror::Error;

// Re-export common types
pub use artifact::{ModelArtifact, ModelMetadata};
pub use forest::{ForestSettings, RandomForest};
pub use importance::{ranked_importances, FeatureImportance};
pub use inference::{assess, predict, Assessment, Prediction};
pub use metrics::{accuracy_score, ClassificationReport};
pub use tree::{MaxFeatures, TreeSettings};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to access model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model file {path} is not a valid artifact: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize model: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error(
        "feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), got v{actual_version} (hash: {actual_hash:08x})"
    )]
    LayoutMismatch {
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },

    #[error("cannot train on an empty dataset")]
    EmptyTrainingSet,

    #[error("invalid model settings: {0}")]
    InvalidSettings(String),
}
