//! Random Forest Classifier
//!
//! Bagged ensemble of CART trees. Each tree gets its own seed and bootstrap
//! sample drawn from one forest RNG, so a fixed seed reproduces the forest
//! exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::tree::{DecisionTree, TreeSettings};
use super::ModelError;
use crate::constants::{DEFAULT_SEED, DEFAULT_TREE_COUNT};
use crate::logic::dataset::{Label, Sample};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestSettings {
    pub n_estimators: usize,
    pub seed: u64,
    pub bootstrap: bool,
    pub tree: TreeSettings,
}

impl Default for ForestSettings {
    fn default() -> Self {
        Self {
            n_estimators: DEFAULT_TREE_COUNT,
            seed: DEFAULT_SEED,
            bootstrap: true,
            tree: TreeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    settings: ForestSettings,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Train on labelled samples
    pub fn fit(samples: &[Sample], settings: ForestSettings) -> Result<Self, ModelError> {
        if samples.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        if settings.n_estimators == 0 {
            return Err(ModelError::InvalidSettings(
                "n_estimators must be at least 1".to_string(),
            ));
        }

        let n = samples.len();
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let mut trees = Vec::with_capacity(settings.n_estimators);

        for _ in 0..settings.n_estimators {
            let tree_seed: u64 = rng.gen();
            let indices: Vec<usize> = if settings.bootstrap {
                (0..n).map(|_| rng.gen_range(0..n)).collect()
            } else {
                (0..n).collect()
            };
            trees.push(DecisionTree::fit(samples, indices, &settings.tree, tree_seed));
        }

        let nodes: usize = trees.iter().map(DecisionTree::node_count).sum();
        log::info!(
            "Trained random forest: {} trees, {} nodes total, {} samples",
            trees.len(),
            nodes,
            n
        );

        Ok(Self { settings, trees })
    }

    /// Mean class probabilities over all trees: [P(no dyslexia), P(dyslexia)]
    pub fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        if self.trees.is_empty() {
            return [0.5, 0.5];
        }

        let mut sum = [0.0; 2];
        for tree in &self.trees {
            let proba = tree.predict_proba(features);
            sum[0] += proba[0];
            sum[1] += proba[1];
        }

        let count = self.trees.len() as f64;
        [sum[0] / count, sum[1] / count]
    }

    /// Most probable label (ties resolve to `NoDyslexia`)
    pub fn predict(&self, features: &FeatureVector) -> Label {
        label_from_proba(&self.predict_proba(features))
    }

    /// Mean impurity-decrease importance per feature, summing to 1.
    /// Uniform when no tree ever split.
    pub fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
        let mut importances = [0.0; FEATURE_COUNT];
        for tree in &self.trees {
            for (total, value) in importances.iter_mut().zip(tree.importances().iter()) {
                *total += value;
            }
        }

        let sum: f64 = importances.iter().sum();
        if sum > 0.0 {
            for value in importances.iter_mut() {
                *value /= sum;
            }
        } else {
            importances = [1.0 / FEATURE_COUNT as f64; FEATURE_COUNT];
        }

        importances
    }

    pub fn settings(&self) -> &ForestSettings {
        &self.settings
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

/// Argmax over a probability pair
pub fn label_from_proba(proba: &[f64; 2]) -> Label {
    if proba[1] > proba[0] {
        Label::Dyslexia
    } else {
        Label::NoDyslexia
    }
}
