//! Model Artifact - persisted forest plus metadata
//!
//! Written once by the trainer, read-only afterwards. The metadata carries
//! the feature layout hash and a SHA-256 checksum of the serialized forest;
//! both are verified on every load.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::forest::RandomForest;
use super::ModelError;
use crate::constants::MODEL_VERSION;
use crate::logic::features::{layout_hash, FEATURE_LAYOUT, FEATURE_VERSION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_version: String,
    pub trained_at: DateTime<Utc>,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub feature_names: Vec<String>,
    pub n_estimators: usize,
    pub seed: u64,
    /// Accuracy on the held-out split, when one was evaluated
    pub test_accuracy: Option<f64>,
    /// Hex SHA-256 of the serialized forest
    pub checksum: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ModelMetadata,
    pub forest: RandomForest,
}

impl ModelArtifact {
    /// Wrap a trained forest with metadata for the current feature layout
    pub fn new(forest: RandomForest, test_accuracy: Option<f64>) -> Result<Self, ModelError> {
        let checksum = forest_checksum(&forest)?;
        let metadata = ModelMetadata {
            model_version: MODEL_VERSION.to_string(),
            trained_at: Utc::now(),
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            n_estimators: forest.n_trees(),
            seed: forest.settings().seed,
            test_accuracy,
            checksum,
        };

        Ok(Self { metadata, forest })
    }

    /// Write as JSON, creating parent directories when needed
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let io_err = |source| ModelError::Io { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.write_all(b"\n").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        log::info!("Model saved to {}", path.display());
        Ok(())
    }

    /// Read and verify an artifact
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&content).map_err(|source| ModelError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        artifact.verify()?;
        log::debug!(
            "Loaded model {} ({} trees) from {}",
            artifact.metadata.model_version,
            artifact.metadata.n_estimators,
            path.display()
        );
        Ok(artifact)
    }

    /// Check layout compatibility and forest integrity
    pub fn verify(&self) -> Result<(), ModelError> {
        let expected_hash = layout_hash();
        if self.metadata.feature_version != FEATURE_VERSION || self.metadata.layout_hash != expected_hash {
            return Err(ModelError::LayoutMismatch {
                expected_version: FEATURE_VERSION,
                expected_hash,
                actual_version: self.metadata.feature_version,
                actual_hash: self.metadata.layout_hash,
            });
        }

        let actual = forest_checksum(&self.forest)?;
        if actual != self.metadata.checksum {
            return Err(ModelError::ChecksumMismatch {
                expected: self.metadata.checksum.clone(),
                actual,
            });
        }

        Ok(())
    }
}

/// Hex SHA-256 of the forest's canonical JSON form
pub fn forest_checksum(forest: &RandomForest) -> Result<String, ModelError> {
    let bytes = serde_json::to_vec(forest)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
