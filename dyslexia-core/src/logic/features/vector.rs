//! Feature Vector - Core data structure for model input
//!
//! Values are ordered by `FEATURE_LAYOUT`. Construction only checks shape
//! (six finite values); slider bounds are checked separately with
//! `check_bounds` because the model accepts any finite input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::{
    feature_index, FEATURE_BOUNDS, FEATURE_COUNT, FEATURE_LAYOUT,
};

// ============================================================================
// ERRORS
// ============================================================================

/// Malformed or out-of-range feature input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("malformed feature vector: expected {expected} values, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("malformed feature vector: {feature} is not a finite number")]
    NonFinite { feature: &'static str },

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    #[error("missing feature: {0}")]
    MissingFeature(&'static str),

    #[error("{feature} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        feature: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Six measurements describing one reading-behavior sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values in layout order
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Result<Self, FeatureError> {
        for (i, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(FeatureError::NonFinite { feature: FEATURE_LAYOUT[i] });
            }
        }
        Ok(Self { values })
    }

    /// Create from a slice, rejecting anything that is not exactly six values
    pub fn from_slice(values: &[f64]) -> Result<Self, FeatureError> {
        let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| FeatureError::WrongLength {
            expected: FEATURE_COUNT,
            actual: values.len(),
        })?;
        Self::from_values(array)
    }

    /// Create from (name, value) pairs in any order. Every feature must be
    /// present exactly once.
    pub fn from_named<'a, I>(pairs: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut slots: [Option<f64>; FEATURE_COUNT] = [None; FEATURE_COUNT];

        for (name, value) in pairs {
            let index = feature_index(name)
                .ok_or_else(|| FeatureError::UnknownFeature(name.to_string()))?;
            slots[index] = Some(value);
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (i, slot) in slots.iter().enumerate() {
            values[i] = slot.ok_or(FeatureError::MissingFeature(FEATURE_LAYOUT[i]))?;
        }

        Self::from_values(values)
    }

    /// Slider defaults
    pub fn defaults() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (value, bounds) in values.iter_mut().zip(FEATURE_BOUNDS.iter()) {
            *value = bounds.default;
        }
        Self { values }
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Verify every value lies inside its widget bounds
    pub fn check_bounds(&self) -> Result<(), FeatureError> {
        for (i, (&value, bounds)) in self.values.iter().zip(FEATURE_BOUNDS.iter()).enumerate() {
            if !bounds.contains(value) {
                return Err(FeatureError::OutOfRange {
                    feature: FEATURE_LAYOUT[i],
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }

    /// Convert to JSON for structured logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let named: serde_json::Map<String, serde_json::Value> = FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();
        serde_json::Value::Object(named)
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_wrong_length() {
        let err = FeatureVector::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, FeatureError::WrongLength { expected: 6, actual: 3 });
    }

    #[test]
    fn test_from_values_rejects_nan() {
        let err = FeatureVector::from_values([60.0, f64::NAN, 30.0, 10.0, 7.0, 70.0]).unwrap_err();
        assert_eq!(err, FeatureError::NonFinite { feature: "fixation_duration" });
    }

    #[test]
    fn test_from_named_any_order() {
        let vector = FeatureVector::from_named([
            ("comprehension_score", 80.0),
            ("reading_speed", 45.0),
            ("spelling_errors", 3.0),
            ("saccade_length", 25.0),
            ("phoneme_errors", 12.0),
            ("fixation_duration", 300.0),
        ])
        .unwrap();

        assert_eq!(vector.as_array(), &[45.0, 300.0, 25.0, 12.0, 3.0, 80.0]);
        assert_eq!(vector.get_by_name("phoneme_errors"), Some(12.0));
    }

    #[test]
    fn test_from_named_missing_and_unknown() {
        let missing = FeatureVector::from_named([("reading_speed", 45.0)]).unwrap_err();
        assert_eq!(missing, FeatureError::MissingFeature("fixation_duration"));

        let unknown = FeatureVector::from_named([("shoe_size", 9.0)]).unwrap_err();
        assert_eq!(unknown, FeatureError::UnknownFeature("shoe_size".to_string()));
    }

    #[test]
    fn test_defaults_within_bounds() {
        let vector = FeatureVector::defaults();
        assert_eq!(vector.as_array(), &[60.0, 350.0, 30.0, 10.0, 7.0, 70.0]);
        assert!(vector.check_bounds().is_ok());
    }

    #[test]
    fn test_check_bounds_reports_first_violation() {
        let vector = FeatureVector::from_values([60.0, 350.0, 30.0, 25.0, 99.0, 70.0]).unwrap();
        match vector.check_bounds() {
            Err(FeatureError::OutOfRange { feature, value, .. }) => {
                assert_eq!(feature, "phoneme_errors");
                assert_eq!(value, 25.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let vector = FeatureVector::defaults();
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "[60.0,350.0,30.0,10.0,7.0,70.0]");
    }

    #[test]
    fn test_to_log_entry() {
        let log = FeatureVector::defaults().to_log_entry();
        assert_eq!(log["reading_speed"], 60.0);
        assert_eq!(log.as_object().map(|m| m.len()), Some(FEATURE_COUNT));
    }
}
