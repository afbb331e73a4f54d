//! CART Decision Tree
//!
//! Binary classification tree grown with Gini impurity. Nodes live in a
//! flat arena (root at index 0) so the tree serializes as plain data.
//! Samples go left when `value <= threshold`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::logic::dataset::Sample;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

/// Number of candidate features examined per split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    /// floor(sqrt(n_features)), at least one
    Sqrt,
    All,
    Count(usize),
}

impl MaxFeatures {
    pub fn resolve(self, n_features: usize) -> usize {
        let k = match self {
            MaxFeatures::Sqrt => (n_features as f64).sqrt().floor() as usize,
            MaxFeatures::All => n_features,
            MaxFeatures::Count(n) => n,
        };
        k.clamp(1, n_features.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSettings {
    /// Unlimited when `None`
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub max_features: MaxFeatures,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        probabilities: [f64; 2],
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    /// Impurity decrease per feature, normalized to sum to 1 (all zero for
    /// a single-leaf tree)
    importances: [f64; FEATURE_COUNT],
}

impl DecisionTree {
    /// Grow a tree on `samples[indices]`. Indices may repeat (bootstrap).
    pub fn fit(samples: &[Sample], mut indices: Vec<usize>, settings: &TreeSettings, seed: u64) -> Self {
        let mut builder = TreeBuilder {
            samples,
            settings,
            max_features: settings.max_features.resolve(FEATURE_COUNT),
            rng: StdRng::seed_from_u64(seed),
            nodes: Vec::new(),
            decrease: [0.0; FEATURE_COUNT],
        };

        if indices.is_empty() {
            builder.nodes.push(TreeNode::Leaf { probabilities: [0.5, 0.5] });
        } else {
            builder.build(&mut indices, 0);
        }

        let total: f64 = builder.decrease.iter().sum();
        let mut importances = builder.decrease;
        if total > 0.0 {
            for value in importances.iter_mut() {
                *value /= total;
            }
        }

        Self {
            nodes: builder.nodes,
            importances,
        }
    }

    /// Class probabilities of the leaf this vector falls into
    pub fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let values = features.as_array();
        let mut node = 0;

        loop {
            match self.nodes.get(node) {
                Some(TreeNode::Leaf { probabilities }) => return *probabilities,
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    node = if values[*feature] <= *threshold { *left } else { *right };
                }
                None => return [0.5, 0.5],
            }
        }
    }

    pub fn importances(&self) -> &[f64; FEATURE_COUNT] {
        &self.importances
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[TreeNode], node: usize) -> usize {
            match nodes.get(node) {
                Some(TreeNode::Split { left, right, .. }) => 1 + walk(nodes, *left).max(walk(nodes, *right)),
                _ => 0,
            }
        }
        walk(&self.nodes, 0)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    /// n_left * gini(left) + n_right * gini(right)
    weighted_impurity: f64,
}

struct TreeBuilder<'a> {
    samples: &'a [Sample],
    settings: &'a TreeSettings,
    max_features: usize,
    rng: StdRng,
    nodes: Vec<TreeNode>,
    decrease: [f64; FEATURE_COUNT],
}

impl<'a> TreeBuilder<'a> {
    /// Build the subtree for `indices` and return its node id
    fn build(&mut self, indices: &mut [usize], depth: usize) -> usize {
        let counts = self.class_counts(indices);
        let n = indices.len();
        let node_id = self.nodes.len();
        self.nodes.push(TreeNode::Leaf { probabilities: probabilities(&counts) });

        let pure = counts[0] == 0.0 || counts[1] == 0.0;
        let depth_reached = self.settings.max_depth.map_or(false, |max| depth >= max);
        if pure || depth_reached || n < self.settings.min_samples_split {
            return node_id;
        }

        let candidate = match self.best_split(indices, &counts) {
            Some(candidate) => candidate,
            None => return node_id,
        };

        let samples = self.samples;
        let feature = candidate.feature;
        let threshold = candidate.threshold;
        let mid = partition(indices, |i| samples[i].features.as_array()[feature] <= threshold);

        self.decrease[feature] += n as f64 * gini(&counts) - candidate.weighted_impurity;

        let (left_indices, right_indices) = indices.split_at_mut(mid);
        let left = self.build(left_indices, depth + 1);
        let right = self.build(right_indices, depth + 1);

        self.nodes[node_id] = TreeNode::Split { feature, threshold, left, right };
        node_id
    }

    /// Examine features in random order until `max_features` non-constant
    /// ones were seen and at least one valid split was found
    fn best_split(&mut self, indices: &[usize], counts: &[f64; 2]) -> Option<SplitCandidate> {
        let mut features: Vec<usize> = (0..FEATURE_COUNT).collect();
        features.shuffle(&mut self.rng);

        let n = indices.len();
        let min_leaf = self.settings.min_samples_leaf.max(1);
        let mut visited = 0;
        let mut best: Option<SplitCandidate> = None;
        let mut column: Vec<(f64, usize)> = Vec::with_capacity(n);

        for feature in features {
            if visited >= self.max_features && best.is_some() {
                break;
            }

            column.clear();
            column.extend(indices.iter().map(|&i| {
                let sample = &self.samples[i];
                (sample.features.as_array()[feature], sample.label.index())
            }));
            column.sort_by(|a, b| a.0.total_cmp(&b.0));

            let constant = column.first().map(|c| c.0) == column.last().map(|c| c.0);
            if constant {
                continue;
            }
            visited += 1;

            let mut left = [0.0; 2];
            let mut right = *counts;

            for pos in 0..n - 1 {
                let class = column[pos].1;
                left[class] += 1.0;
                right[class] -= 1.0;

                let (value, next) = (column[pos].0, column[pos + 1].0);
                if value == next {
                    continue;
                }

                let n_left = pos + 1;
                let n_right = n - n_left;
                if n_left < min_leaf || n_right < min_leaf {
                    continue;
                }

                let weighted_impurity = n_left as f64 * gini(&left) + n_right as f64 * gini(&right);
                if best.as_ref().map_or(true, |b| weighted_impurity < b.weighted_impurity) {
                    let mut threshold = (value + next) / 2.0;
                    if threshold >= next {
                        threshold = value;
                    }
                    best = Some(SplitCandidate { feature, threshold, weighted_impurity });
                }
            }
        }

        best
    }

    fn class_counts(&self, indices: &[usize]) -> [f64; 2] {
        let mut counts = [0.0; 2];
        for &i in indices {
            counts[self.samples[i].label.index()] += 1.0;
        }
        counts
    }
}

fn gini(counts: &[f64; 2]) -> f64 {
    let total = counts[0] + counts[1];
    if total == 0.0 {
        return 0.0;
    }
    let p0 = counts[0] / total;
    let p1 = counts[1] / total;
    1.0 - p0 * p0 - p1 * p1
}

fn probabilities(counts: &[f64; 2]) -> [f64; 2] {
    let total = counts[0] + counts[1];
    if total == 0.0 {
        return [0.5, 0.5];
    }
    [counts[0] / total, counts[1] / total]
}

/// Move indices satisfying `goes_left` to the front; returns how many did
fn partition(indices: &mut [usize], mut goes_left: impl FnMut(usize) -> bool) -> usize {
    let mut mid = 0;
    for i in 0..indices.len() {
        if goes_left(indices[i]) {
            indices.swap(i, mid);
            mid += 1;
        }
    }
    mid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dataset::Label;

    fn sample(values: [f64; FEATURE_COUNT], label: Label) -> Sample {
        Sample::new(FeatureVector::from_values(values).unwrap(), label)
    }

    /// Label depends only on reading speed
    fn threshold_samples() -> Vec<Sample> {
        (0..40)
            .map(|i| {
                let speed = 20.0 + i as f64 * 2.0;
                let label = if speed < 50.0 { Label::Dyslexia } else { Label::NoDyslexia };
                sample([speed, 300.0, 30.0, 10.0, 7.0, 70.0], label)
            })
            .collect()
    }

    #[test]
    fn test_max_features_resolve() {
        assert_eq!(MaxFeatures::Sqrt.resolve(6), 2);
        assert_eq!(MaxFeatures::All.resolve(6), 6);
        assert_eq!(MaxFeatures::Count(0).resolve(6), 1);
        assert_eq!(MaxFeatures::Count(10).resolve(6), 6);
    }

    #[test]
    fn test_gini() {
        assert_eq!(gini(&[10.0, 0.0]), 0.0);
        assert!((gini(&[5.0, 5.0]) - 0.5).abs() < 1e-12);
        assert_eq!(gini(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_fits_single_threshold() {
        let samples = threshold_samples();
        let indices = (0..samples.len()).collect();
        let tree = DecisionTree::fit(&samples, indices, &TreeSettings::default(), 1);

        for s in &samples {
            let proba = tree.predict_proba(&s.features);
            assert_eq!(proba[s.label.index()], 1.0);
        }

        // Only reading speed varies, so it carries all the importance
        assert!((tree.importances()[0] - 1.0).abs() < 1e-12);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_pure_node_is_single_leaf() {
        let samples: Vec<Sample> = (0..10)
            .map(|i| sample([20.0 + i as f64, 300.0, 30.0, 10.0, 7.0, 70.0], Label::NoDyslexia))
            .collect();
        let tree = DecisionTree::fit(&samples, (0..10).collect(), &TreeSettings::default(), 0);

        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.importances(), &[0.0; FEATURE_COUNT]);
        assert_eq!(tree.predict_proba(&samples[0].features), [1.0, 0.0]);
    }

    #[test]
    fn test_max_depth_limits_growth() {
        let samples: Vec<Sample> = (0..40)
            .map(|i| {
                let label = if i % 2 == 0 { Label::Dyslexia } else { Label::NoDyslexia };
                sample([20.0 + i as f64, 300.0, 30.0, 10.0, 7.0, 70.0], label)
            })
            .collect();
        let settings = TreeSettings { max_depth: Some(2), ..TreeSettings::default() };
        let tree = DecisionTree::fit(&samples, (0..40).collect(), &settings, 5);

        assert!(tree.depth() <= 2);
        let proba = tree.predict_proba(&samples[0].features);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_samples_leaf_respected() {
        let samples = threshold_samples();
        let settings = TreeSettings { min_samples_leaf: 30, ..TreeSettings::default() };
        let tree = DecisionTree::fit(&samples, (0..samples.len()).collect(), &settings, 3);

        // 40 samples cannot be split into two leaves of 30
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_same_seed_same_tree() {
        let samples = threshold_samples();
        let a = DecisionTree::fit(&samples, (0..samples.len()).collect(), &TreeSettings::default(), 9);
        let b = DecisionTree::fit(&samples, (0..samples.len()).collect(), &TreeSettings::default(), 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_partition() {
        let mut indices = vec![5, 1, 4, 2, 3];
        let mid = partition(&mut indices, |i| i <= 2);
        assert_eq!(mid, 2);
        assert!(indices[..mid].iter().all(|&i| i <= 2));
        assert!(indices[mid..].iter().all(|&i| i > 2));
    }
}
