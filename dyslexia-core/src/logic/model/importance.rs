//! Feature importance ranking for display

use serde::{Deserialize, Serialize};

use crate::logic::features::{feature_label, feature_name, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub label: String,
    pub importance: f64,
}

/// Label every importance and sort by importance DESC (layout order on ties)
pub fn ranked_importances(importances: &[f64; FEATURE_COUNT]) -> Vec<FeatureImportance> {
    let mut ranked: Vec<FeatureImportance> = importances
        .iter()
        .enumerate()
        .map(|(i, &importance)| FeatureImportance {
            feature: feature_name(i).unwrap_or("unknown").to_string(),
            label: feature_label(i).unwrap_or("Unknown").to_string(),
            importance,
        })
        .collect();

    ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    ranked
}
