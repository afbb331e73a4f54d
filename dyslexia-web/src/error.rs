//! Error handling
//!
//! One error type for every handler. JSON routes return it directly;
//! the HTML form renders `user_message()` inside the page instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use dyslexia_core::{FeatureError, ModelError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Model file missing, corrupt or built for another feature layout
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Malformed or out-of-range feature input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user
    pub fn user_message(&self) -> String {
        match self {
            AppError::ModelUnavailable(msg) => msg.clone(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.user_message(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match &err {
            ModelError::NotFound(path) => AppError::ModelUnavailable(format!(
                "Model not found at {}. Run dyslexia-train first.",
                path.display()
            )),
            ModelError::Format { .. }
            | ModelError::ChecksumMismatch { .. }
            | ModelError::LayoutMismatch { .. } => {
                tracing::error!("Model rejected: {}", err);
                AppError::ModelUnavailable(
                    "Model file is corrupt or incompatible. Retrain the model.".to_string(),
                )
            }
            _ => AppError::InternalError(err.to_string()),
        }
    }
}

impl From<FeatureError> for AppError {
    fn from(err: FeatureError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("prediction task failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_model_maps_to_unavailable() {
        let err: AppError = ModelError::NotFound(PathBuf::from("models/m.json")).into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.user_message().contains("Model not found"));
    }

    #[test]
    fn test_checksum_mismatch_hides_details() {
        let err: AppError = ModelError::ChecksumMismatch {
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.user_message().contains("aa"));
    }

    #[test]
    fn test_feature_error_is_bad_request() {
        let err: AppError = FeatureError::MissingFeature("reading_speed").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "missing feature: reading_speed");
    }

    #[test]
    fn test_internal_error_message_is_generic() {
        let err = AppError::InternalError("disk on fire".to_string());
        assert_eq!(err.user_message(), "Internal server error");
    }
}
