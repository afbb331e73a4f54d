//! JSON API handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use uuid::Uuid;

use dyslexia_core::LayoutInfo;

use super::assess_blocking;
use crate::models::{FeatureInput, PredictionResponse};
use crate::{AppError, AppResult, AppState};

/// `POST /api/v1/predict`
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<FeatureInput>, JsonRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let Json(input) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
    let request_id = Uuid::new_v4();

    let features = input.to_features()?;
    let assessment = assess_blocking(&state, features).await?;

    tracing::info!(
        %request_id,
        label = %assessment.prediction.label,
        confidence = assessment.prediction.confidence,
        "API prediction served"
    );

    Ok(Json(PredictionResponse::new(request_id, assessment)))
}

/// `GET /api/v1/features` - names, labels, units and bounds
pub async fn features() -> Json<LayoutInfo> {
    Json(LayoutInfo::current())
}
