//! Synthetic Data Generator
//!
//! Draws each feature uniformly from the integers in `[min, max)` of its
//! slider bounds and labels a row positive when reading is slow and phoneme
//! errors are frequent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::record::{Label, Sample};
use crate::constants::{DEFAULT_SAMPLE_COUNT, DEFAULT_SEED};
use crate::logic::features::{FeatureVector, FEATURE_BOUNDS, FEATURE_COUNT};

/// Rows below this reading speed count toward the positive rule
pub const READING_SPEED_CUTOFF: f64 = 50.0;

/// Rows above this phoneme error count count toward the positive rule
pub const PHONEME_ERROR_CUTOFF: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct SynthConfig {
    pub sample_count: usize,
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

/// Ground-truth rule used to label synthetic rows
pub fn label_for(features: &FeatureVector) -> Label {
    let reading_speed = features
        .get_by_name("reading_speed")
        .unwrap_or(f64::INFINITY);
    let phoneme_errors = features
        .get_by_name("phoneme_errors")
        .unwrap_or(0.0);

    if reading_speed < READING_SPEED_CUTOFF && phoneme_errors > PHONEME_ERROR_CUTOFF {
        Label::Dyslexia
    } else {
        Label::NoDyslexia
    }
}

/// Generate `config.sample_count` labelled samples
pub fn generate(config: &SynthConfig) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.sample_count);

    for _ in 0..config.sample_count {
        let mut values = [0.0; FEATURE_COUNT];
        for (value, bounds) in values.iter_mut().zip(FEATURE_BOUNDS.iter()) {
            let low = bounds.min as i64;
            let high = bounds.max as i64;
            *value = rng.gen_range(low..high) as f64;
        }

        // Integer draws are always finite
        let features = match FeatureVector::from_values(values) {
            Ok(features) => features,
            Err(_) => continue,
        };
        let label = label_for(&features);
        samples.push(Sample::new(features, label));
    }

    let positives = samples.iter().filter(|s| s.label.is_positive()).count();
    log::debug!(
        "Generated {} synthetic samples ({} positive, seed {})",
        samples.len(),
        positives,
        config.seed
    );

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_count() {
        let samples = generate(&SynthConfig { sample_count: 250, seed: 7 });
        assert_eq!(samples.len(), 250);
    }

    #[test]
    fn test_same_seed_same_data() {
        let config = SynthConfig { sample_count: 100, seed: 42 };
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn test_different_seed_different_data() {
        let a = generate(&SynthConfig { sample_count: 100, seed: 1 });
        let b = generate(&SynthConfig { sample_count: 100, seed: 2 });
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_are_integers_in_half_open_range() {
        for sample in generate(&SynthConfig { sample_count: 500, seed: 3 }) {
            for (value, bounds) in sample.features.as_slice().iter().zip(FEATURE_BOUNDS.iter()) {
                assert_eq!(value.fract(), 0.0);
                assert!(*value >= bounds.min && *value < bounds.max);
            }
        }
    }

    #[test]
    fn test_labels_follow_rule() {
        for sample in generate(&SynthConfig::default()) {
            assert_eq!(sample.label, label_for(&sample.features));
        }
    }

    #[test]
    fn test_label_rule_edges() {
        let slow_many = FeatureVector::from_values([49.0, 300.0, 20.0, 11.0, 5.0, 60.0]).unwrap();
        let at_speed_cutoff = FeatureVector::from_values([50.0, 300.0, 20.0, 11.0, 5.0, 60.0]).unwrap();
        let at_error_cutoff = FeatureVector::from_values([49.0, 300.0, 20.0, 10.0, 5.0, 60.0]).unwrap();

        assert_eq!(label_for(&slow_many), Label::Dyslexia);
        assert_eq!(label_for(&at_speed_cutoff), Label::NoDyslexia);
        assert_eq!(label_for(&at_error_cutoff), Label::NoDyslexia);
    }

    #[test]
    fn test_both_classes_present() {
        let samples = generate(&SynthConfig::default());
        assert!(samples.iter().any(|s| s.label == Label::Dyslexia));
        assert!(samples.iter().any(|s| s.label == Label::NoDyslexia));
    }
}
