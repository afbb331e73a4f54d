//! HTTP handlers

pub mod health;
pub mod form;
pub mod predict;
pub mod api;

use dyslexia_core::{assess, Assessment, FeatureVector};

use crate::{AppResult, AppState};

/// Load the model and run inference off the async runtime
pub(crate) async fn assess_blocking(state: &AppState, features: FeatureVector) -> AppResult<Assessment> {
    let path = state.config.model_path.clone();
    let assessment = tokio::task::spawn_blocking(move || assess(&path, &features)).await??;
    Ok(assessment)
}
