//! Dyslexia Screening Core
//!
//! Feature layout, synthetic dataset, random forest classifier and the
//! training pipeline shared by the trainer and the web server.

pub mod constants;
pub mod logic;

pub use logic::config::{ConfigError, TrainConfig};
pub use logic::dataset::{DatasetError, Label, Sample};
pub use logic::features::{FeatureError, FeatureVector, LayoutInfo};
pub use logic::model::{assess, Assessment, FeatureImportance, ModelArtifact, ModelError, Prediction};
pub use logic::pipeline::{run, run_from_csv, PipelineError, TrainingReport};
