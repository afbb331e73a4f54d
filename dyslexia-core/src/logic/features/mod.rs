//! Features Module - Feature Layout & Vectors
//!
//! The six reading-behavior measurements, their order, labels and input
//! bounds live in `layout`; `vector` holds the validated input type.

pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{
    feature_index, feature_label, feature_name, layout_hash, FeatureBounds, LayoutInfo,
    FEATURE_BOUNDS, FEATURE_COUNT, FEATURE_LABELS, FEATURE_LAYOUT, FEATURE_VERSION,
};
pub use vector::{FeatureError, FeatureVector};
