//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema shared by the trainer, the model
//! artifact and the web form.**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! A model trained against one layout refuses to load against another
//! (see `layout_hash`).

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "reading_speed",         // 0: words per minute
    "fixation_duration",     // 1: milliseconds
    "saccade_length",        // 2: pixels
    "phoneme_errors",        // 3: count
    "spelling_errors",       // 4: count
    "comprehension_score",   // 5: score
];

/// Human readable labels, same order as FEATURE_LAYOUT
pub const FEATURE_LABELS: &[&str] = &[
    "Reading Speed",
    "Fixation Duration",
    "Saccade Length",
    "Phoneme Errors",
    "Spelling Errors",
    "Comprehension Score",
];

/// Units shown next to the slider label (empty when unitless)
pub const FEATURE_UNITS: &[&str] = &[
    "words/minute",
    "milliseconds",
    "pixels",
    "",
    "",
    "",
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 6;

// ============================================================================
// INPUT BOUNDS
// ============================================================================

/// Inclusive slider bounds and default value for one feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FeatureBounds {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Widget bounds, same order as FEATURE_LAYOUT.
/// The model itself accepts any finite value; only the input surface
/// enforces these.
pub const FEATURE_BOUNDS: [FeatureBounds; FEATURE_COUNT] = [
    FeatureBounds::new(20.0, 100.0, 60.0),
    FeatureBounds::new(200.0, 500.0, 350.0),
    FeatureBounds::new(10.0, 50.0, 30.0),
    FeatureBounds::new(0.0, 20.0, 10.0),
    FeatureBounds::new(0.0, 15.0, 7.0),
    FeatureBounds::new(40.0, 100.0, 70.0),
];

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches when a model is loaded
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Per-feature description served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    pub label: String,
    pub unit: String,
    pub bounds: FeatureBounds,
}

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub features: Vec<FeatureSpec>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        let features = (0..FEATURE_COUNT)
            .map(|i| FeatureSpec {
                name: FEATURE_LAYOUT[i].to_string(),
                label: FEATURE_LABELS[i].to_string(),
                unit: FEATURE_UNITS[i].to_string(),
                bounds: FEATURE_BOUNDS[i],
            })
            .collect();

        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            features,
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Check if layout is compatible (same version, same hash)
pub fn is_layout_compatible(version: u8, hash: u32) -> bool {
    version == FEATURE_VERSION && hash == layout_hash()
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

/// Get display label by index
pub fn feature_label(index: usize) -> Option<&'static str> {
    FEATURE_LABELS.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 6);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_LABELS.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_UNITS.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(compute_layout_hash(), compute_layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_layout_compatibility() {
        assert!(is_layout_compatible(FEATURE_VERSION, layout_hash()));
        assert!(!is_layout_compatible(FEATURE_VERSION + 1, layout_hash()));
        assert!(!is_layout_compatible(FEATURE_VERSION, layout_hash().wrapping_add(1)));
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("reading_speed"), Some(0));
        assert_eq!(feature_index("phoneme_errors"), Some(3));
        assert_eq!(feature_index("comprehension_score"), Some(5));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name_and_label() {
        assert_eq!(feature_name(1), Some("fixation_duration"));
        assert_eq!(feature_label(1), Some("Fixation Duration"));
        assert_eq!(feature_name(6), None);
        assert_eq!(feature_label(6), None);
    }

    #[test]
    fn test_bounds_defaults_inside_range() {
        for bounds in FEATURE_BOUNDS.iter() {
            assert!(bounds.min < bounds.max);
            assert!(bounds.contains(bounds.default));
        }
        assert!(FEATURE_BOUNDS[0].contains(20.0));
        assert!(FEATURE_BOUNDS[0].contains(100.0));
        assert!(!FEATURE_BOUNDS[0].contains(100.5));
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.feature_count, FEATURE_COUNT);
        assert_eq!(info.features.len(), FEATURE_COUNT);
        assert_eq!(info.features[2].name, "saccade_length");
        assert_eq!(info.features[2].unit, "pixels");
    }
}
