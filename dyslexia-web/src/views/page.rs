//! Slider form page
//!
//! One template serves both `GET /` and `POST /predict`: the form always
//! shows the current values, followed by either a result or an error.

use std::fmt::Write;

use dyslexia_core::constants::APP_NAME;
use dyslexia_core::logic::features::{FEATURE_BOUNDS, FEATURE_LABELS, FEATURE_LAYOUT};
use dyslexia_core::{Assessment, Label};

const STYLE: &str = include_str!("../../assets/style.css");

/// Prediction outcome shown under the form
#[derive(Debug, Clone)]
pub struct ResultView {
    pub label: Label,
    pub confidence_percent: f64,
    /// Inline SVG
    pub chart: String,
}

impl ResultView {
    pub fn new(assessment: &Assessment, chart: String) -> Self {
        Self {
            label: assessment.prediction.label,
            confidence_percent: assessment.prediction.confidence_percent(),
            chart,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageView {
    /// Slider positions, layout order
    pub values: [f64; 6],
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

impl PageView {
    pub fn form(values: [f64; 6]) -> Self {
        Self {
            values,
            result: None,
            error: None,
        }
    }

    pub fn with_result(values: [f64; 6], result: ResultView) -> Self {
        Self {
            result: Some(result),
            ..Self::form(values)
        }
    }

    pub fn with_error(values: [f64; 6], message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::form(values)
        }
    }
}

pub fn render(view: &PageView) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{style}</style>
</head>
<body>
<main>
<h1>{title}</h1>
<p>Adjust the reading measurements and run the screening model.</p>
<form method="post" action="/predict">
"#,
        title = APP_NAME,
        style = STYLE,
    );

    for (i, name) in FEATURE_LAYOUT.iter().enumerate() {
        let bounds = FEATURE_BOUNDS[i];
        let value = view.values[i];
        let _ = write!(
            html,
            r#"<div class="slider">
<label for="{name}">{label}</label>
<input type="range" id="{name}" name="{name}" min="{min}" max="{max}" step="1" value="{value}" oninput="this.nextElementSibling.value = this.value">
<output for="{name}">{value}</output>
</div>
"#,
            name = name,
            label = escape(FEATURE_LABELS[i]),
            min = bounds.min,
            max = bounds.max,
            value = value,
        );
    }

    html.push_str("<button type=\"submit\">Detect Dyslexia</button>\n</form>\n");

    if let Some(error) = &view.error {
        let _ = writeln!(html, "<div class=\"error\">Error: {}</div>", escape(error));
    }

    if let Some(result) = &view.result {
        let class = if result.label.is_positive() { "positive" } else { "negative" };
        let _ = write!(
            html,
            r#"<section class="result {class}">
<h2>{headline}</h2>
<p>Confidence: {confidence:.2}%</p>
</section>
<section class="chart">
{chart}
</section>
"#,
            class = class,
            headline = escape(result.label.headline()),
            confidence = result.confidence_percent,
            chart = result.chart,
        );
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Minimal HTML text escaping
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: [f64; 6] = [60.0, 350.0, 30.0, 10.0, 7.0, 70.0];

    #[test]
    fn test_form_has_six_sliders() {
        let html = render(&PageView::form(DEFAULTS));

        assert!(html.contains("<h1>Dyslexia Detection System</h1>"));
        assert_eq!(html.matches("type=\"range\"").count(), 6);
        assert!(html.contains(r#"name="reading_speed" min="20" max="100" step="1" value="60""#));
        assert!(html.contains("Detect Dyslexia"));
        assert!(!html.contains("Confidence:"));
    }

    #[test]
    fn test_result_section() {
        let result = ResultView {
            label: Label::Dyslexia,
            confidence_percent: 87.456,
            chart: "<svg></svg>".to_string(),
        };
        let html = render(&PageView::with_result(DEFAULTS, result));

        assert!(html.contains("<h2>Dyslexia Detected</h2>"));
        assert!(html.contains("Confidence: 87.46%"));
        assert!(html.contains("<svg></svg>"));
        assert!(html.contains("result positive"));
    }

    #[test]
    fn test_error_is_escaped() {
        let html = render(&PageView::with_error(DEFAULTS, "<script>bad</script>"));
        assert!(html.contains("Error: &lt;script&gt;bad&lt;/script&gt;"));
        assert!(!html.contains("<script>bad"));
    }

    #[test]
    fn test_submitted_values_are_kept() {
        let mut values = DEFAULTS;
        values[3] = 15.0;
        let html = render(&PageView::form(values));
        assert!(html.contains(r#"name="phoneme_errors" min="0" max="20" step="1" value="15""#));
    }
}
