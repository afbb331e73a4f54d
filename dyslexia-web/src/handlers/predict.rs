//! Form submission handler
//!
//! Every failure is rendered as an error banner inside the page, with the
//! submitted values kept in the sliders.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use uuid::Uuid;

use super::assess_blocking;
use crate::models::FeatureInput;
use crate::views::{importance_chart, render, PageView, ResultView};
use crate::{AppError, AppResult, AppState};

/// `POST /predict`
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<FeatureInput>, FormRejection>,
) -> Response {
    let request_id = Uuid::new_v4();

    let (values, outcome) = match form {
        Ok(Form(input)) => (input.values(), assess_form(&state, &input, request_id).await),
        Err(rejection) => (
            FeatureInput::default().values(),
            Err(AppError::InvalidInput(rejection.body_text())),
        ),
    };

    match outcome {
        Ok(result) => Html(render(&PageView::with_result(values, result))).into_response(),
        Err(err) => {
            tracing::warn!(%request_id, "Form prediction failed: {}", err);
            let page = render(&PageView::with_error(values, err.user_message()));
            (err.status_code(), Html(page)).into_response()
        }
    }
}

async fn assess_form(state: &AppState, input: &FeatureInput, request_id: Uuid) -> AppResult<ResultView> {
    let features = input.to_features()?;
    tracing::debug!(%request_id, features = %features.to_log_entry(), "Form prediction requested");

    let assessment = assess_blocking(state, features).await?;
    let chart = importance_chart(&assessment.importances)?;

    tracing::info!(
        %request_id,
        label = %assessment.prediction.label,
        confidence = assessment.prediction.confidence,
        inference_time_us = assessment.inference_time_us,
        "Prediction served"
    );

    Ok(ResultView::new(&assessment, chart))
}
