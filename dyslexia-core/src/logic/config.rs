//! Training Configuration
//!
//! Paths, seed and sizes for one training run. Loaded from the environment
//! with the defaults from `constants.rs`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    self, DEFAULT_DATA_PATH, DEFAULT_MODEL_PATH, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED,
    DEFAULT_TEST_RATIO, DEFAULT_TREE_COUNT,
};
use crate::logic::dataset::SynthConfig;
use crate::logic::model::{ForestSettings, TreeSettings};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sample count must be at least 2, got {0}")]
    SampleCount(usize),

    #[error("test ratio must be strictly between 0 and 1, got {0}")]
    TestRatio(f64),

    #[error("tree count must be at least 1")]
    TreeCount,

    #[error("max depth must be at least 1 when set")]
    MaxDepth,
}

// ============================================================================
// TRAIN CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Generated CSV destination
    pub data_path: PathBuf,
    /// Model artifact destination
    pub model_path: PathBuf,
    /// Seeds data synthesis, the split and the forest
    pub seed: u64,
    pub sample_count: usize,
    pub test_ratio: f64,
    pub tree_count: usize,
    /// Unlimited when `None`
    pub max_depth: Option<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            seed: DEFAULT_SEED,
            sample_count: DEFAULT_SAMPLE_COUNT,
            test_ratio: DEFAULT_TEST_RATIO,
            tree_count: DEFAULT_TREE_COUNT,
            max_depth: None,
        }
    }
}

impl TrainConfig {
    /// Read `DYSLEXIA_*` variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            data_path: PathBuf::from(constants::get_data_path()),
            model_path: PathBuf::from(constants::get_model_path()),
            seed: constants::get_seed(),
            sample_count: constants::get_sample_count(),
            test_ratio: constants::get_test_ratio(),
            tree_count: constants::get_tree_count(),
            max_depth: constants::get_max_depth(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count < 2 {
            return Err(ConfigError::SampleCount(self.sample_count));
        }
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(ConfigError::TestRatio(self.test_ratio));
        }
        if self.tree_count == 0 {
            return Err(ConfigError::TreeCount);
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::MaxDepth);
        }
        Ok(())
    }

    pub fn synth_config(&self) -> SynthConfig {
        SynthConfig {
            sample_count: self.sample_count,
            seed: self.seed,
        }
    }

    pub fn forest_settings(&self) -> ForestSettings {
        ForestSettings {
            n_estimators: self.tree_count,
            seed: self.seed,
            bootstrap: true,
            tree: TreeSettings {
                max_depth: self.max_depth,
                ..TreeSettings::default()
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
