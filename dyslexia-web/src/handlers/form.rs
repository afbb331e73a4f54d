//! Slider form

use axum::response::Html;

use crate::models::FeatureInput;
use crate::views::{render, PageView};

/// `GET /` - form with every slider at its default
pub async fn index() -> Html<String> {
    Html(render(&PageView::form(FeatureInput::default().values())))
}
