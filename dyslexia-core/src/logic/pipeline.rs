//! Training Pipeline
//!
//! generate -> write CSV -> split -> fit -> evaluate -> save.
//! Every random step is seeded from `TrainConfig::seed`, so two runs with
//! the same config report the same accuracy.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::logic::config::{ConfigError, TrainConfig};
use crate::logic::dataset::{self, DatasetError, Label, Sample};
use crate::logic::model::{ClassificationReport, ModelArtifact, ModelError, RandomForest};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Outcome of one training run
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    /// Accuracy on the held-out split
    pub accuracy: f64,
    pub report: ClassificationReport,
    pub train_size: usize,
    pub test_size: usize,
    /// `None` when training read an existing CSV
    pub data_path: Option<PathBuf>,
    pub model_path: PathBuf,
}

impl TrainingReport {
    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy * 100.0
    }
}

/// Generate synthetic data, write it out, then train and save the model
pub fn run(config: &TrainConfig) -> Result<TrainingReport, PipelineError> {
    config.validate()?;

    let samples = dataset::generate(&config.synth_config());
    let written = dataset::write_csv(&config.data_path, &samples)?;
    log::info!("Wrote {} samples to {}", written, config.data_path.display());

    let mut report = train_and_save(samples, config)?;
    report.data_path = Some(config.data_path.clone());
    Ok(report)
}

/// Train on an existing CSV file instead of generating one
pub fn run_from_csv(csv_path: &Path, config: &TrainConfig) -> Result<TrainingReport, PipelineError> {
    config.validate()?;

    let samples = dataset::load_csv(csv_path)?;
    log::info!("Loaded {} samples from {}", samples.len(), csv_path.display());

    train_and_save(samples, config)
}

fn train_and_save(samples: Vec<Sample>, config: &TrainConfig) -> Result<TrainingReport, PipelineError> {
    let (train, test) = dataset::train_test_split(samples, config.test_ratio, config.seed)?;
    log::info!(
        "Training {} trees on {} samples, testing on {}",
        config.tree_count,
        train.len(),
        test.len()
    );

    let forest = RandomForest::fit(&train, config.forest_settings())?;

    let truth: Vec<Label> = test.iter().map(|s| s.label).collect();
    let predicted: Vec<Label> = test.iter().map(|s| forest.predict(&s.features)).collect();
    let report = ClassificationReport::new(&truth, &predicted);
    let accuracy = report.accuracy;
    log::info!("Test accuracy {:.4}", accuracy);

    ModelArtifact::new(forest, Some(accuracy))?.save(&config.model_path)?;

    Ok(TrainingReport {
        accuracy,
        report,
        train_size: train.len(),
        test_size: test.len(),
        data_path: None,
        model_path: config.model_path.clone(),
    })
}
