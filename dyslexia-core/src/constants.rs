//! Central Configuration Constants
//!
//! Single source of truth for all training and serving defaults.
//! Every default can be overridden through an environment variable.

/// Where the trainer writes the generated sample data
pub const DEFAULT_DATA_PATH: &str = "data/sample_data.csv";

/// Where the trainer writes the model artifact (and the server reads it)
pub const DEFAULT_MODEL_PATH: &str = "models/dyslexia_model.json";

/// Fixed seed for data synthesis, train/test split and the forest
pub const DEFAULT_SEED: u64 = 42;

/// Number of synthetic samples
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Fraction of samples held out for evaluation
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

/// Number of trees in the forest
pub const DEFAULT_TREE_COUNT: usize = 100;

/// Model artifact format version
pub const MODEL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Dyslexia Detection System";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get sample data path from environment or use default
pub fn get_data_path() -> String {
    std::env::var("DYSLEXIA_DATA_PATH")
        .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string())
}

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("DYSLEXIA_MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get random seed from environment or use default
pub fn get_seed() -> u64 {
    std::env::var("DYSLEXIA_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED)
}

/// Get synthetic sample count from environment or use default
pub fn get_sample_count() -> usize {
    std::env::var("DYSLEXIA_SAMPLE_COUNT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SAMPLE_COUNT)
}

/// Get test split ratio from environment or use default
pub fn get_test_ratio() -> f64 {
    std::env::var("DYSLEXIA_TEST_RATIO")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TEST_RATIO)
}

/// Get forest size from environment or use default
pub fn get_tree_count() -> usize {
    std::env::var("DYSLEXIA_TREE_COUNT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TREE_COUNT)
}

/// Get optional tree depth limit from environment (unlimited when unset)
pub fn get_max_depth() -> Option<usize> {
    std::env::var("DYSLEXIA_MAX_DEPTH")
        .ok()
        .and_then(|s| s.parse().ok())
}
