//! Logic Module - Training & Inference
//!
//! - `features/` - Feature layout, bounds and vectors
//! - `dataset/` - Synthetic samples, CSV storage, train/test split
//! - `model/` - Random forest, model artifact, inference and metrics
//! - `pipeline` - End-to-end training run driven by `config`

pub mod config;
pub mod features;
pub mod dataset;
pub mod model;
pub mod pipeline;
