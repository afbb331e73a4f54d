//! Dataset Module - Synthetic Training Data
//!
//! Generates labelled samples, stores them as CSV and splits them for
//! training and evaluation.

pub mod record;
pub mod synth;
pub mod writer;
pub mod loader;
pub mod split;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use loader::load_csv;
pub use record::{Label, Sample};
pub use split::train_test_split;
pub use synth::{generate, SynthConfig};
pub use writer::write_csv;

/// Name of the label column in the CSV file
pub const LABEL_COLUMN: &str = "dyslexia";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV header: {0}")]
    Header(String),

    #[error("invalid CSV row at line {line}: {message}")]
    Row { line: usize, message: String },

    #[error("test ratio must be strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),

    #[error("not enough samples to split: {0}")]
    TooFewSamples(usize),
}

impl DatasetError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        DatasetError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
