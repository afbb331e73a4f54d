use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logic::features::FeatureVector;

/// Binary screening outcome
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    NoDyslexia,
    Dyslexia,
}

impl Label {
    /// Both classes in index order
    pub const ALL: [Label; 2] = [Label::NoDyslexia, Label::Dyslexia];

    /// Class index used in the CSV `dyslexia` column and probability pairs
    pub fn index(self) -> usize {
        match self {
            Label::NoDyslexia => 0,
            Label::Dyslexia => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Label::NoDyslexia),
            1 => Some(Label::Dyslexia),
            _ => None,
        }
    }

    pub fn is_positive(self) -> bool {
        self == Label::Dyslexia
    }

    /// Headline shown to the user
    pub fn headline(self) -> &'static str {
        match self {
            Label::NoDyslexia => "No Dyslexia Detected",
            Label::Dyslexia => "Dyslexia Detected",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

/// One labelled row of training data
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: FeatureVector,
    pub label: Label,
}

impl Sample {
    pub fn new(features: FeatureVector, label: Label) -> Self {
        Self { features, label }
    }
}
