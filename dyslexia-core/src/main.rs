//! Dyslexia Screening - Model Trainer
//!
//! Generates the sample data, trains the forest and saves the model.
//! Takes no arguments; see `constants.rs` for the environment overrides.

use anyhow::{Context, Result};

use dyslexia_core::constants::APP_NAME;
use dyslexia_core::{run, TrainConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainConfig::from_env();
    log::info!("{} trainer v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    log::debug!("Training config: {:?}", config);

    let report = run(&config).context("training run failed")?;

    println!("Model Accuracy: {:.2}%", report.accuracy_percent());
    println!();
    println!("Classification Report:");
    println!("{}", report.report);
    println!("Model saved to {}", report.model_path.display());

    Ok(())
}
