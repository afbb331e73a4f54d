//! Feature importance bar chart, rendered to an inline SVG string

use plotters::prelude::*;

use dyslexia_core::FeatureImportance;

use crate::error::AppError;

pub const CHART_TITLE: &str = "Feature Importance in Dyslexia Detection";

const WIDTH: u32 = 720;
const HEIGHT: u32 = 360;
const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);

/// Horizontal bars, highest importance on top. `importances` must already
/// be sorted descending.
pub fn importance_chart(importances: &[FeatureImportance]) -> Result<String, AppError> {
    let n = importances.len() as i32;
    let max_value = importances
        .iter()
        .map(|i| i.importance)
        .fold(0.0_f64, f64::max)
        .max(0.01);

    // Segment 0 is the bottom row
    let label_at = |segment: i32| -> String {
        let rank = n - 1 - segment;
        importances
            .get(rank as usize)
            .map(|i| i.label.clone())
            .unwrap_or_default()
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 22).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(170)
            .build_cartesian_2d(0f64..max_value * 1.15, (0..n).into_segmented())
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Importance")
            .x_label_formatter(&|v| format!("{:.2}", v))
            .y_labels(importances.len().max(1))
            .y_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => label_at(*i),
                SegmentValue::Last => String::new(),
            })
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(importances.iter().enumerate().map(|(rank, item)| {
                let segment = n - 1 - rank as i32;
                let mut bar = Rectangle::new(
                    [
                        (0.0, SegmentValue::Exact(segment)),
                        (item.importance, SegmentValue::Exact(segment + 1)),
                    ],
                    BAR_COLOR.filled(),
                );
                bar.set_margin(6, 6, 0, 0);
                bar
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}

fn chart_error<E: std::fmt::Display>(err: E) -> AppError {
    AppError::InternalError(format!("chart rendering failed: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyslexia_core::logic::model::ranked_importances;

    #[test]
    fn test_chart_contains_title_and_labels() {
        let ranked = ranked_importances(&[0.3, 0.05, 0.05, 0.4, 0.1, 0.1]);
        let svg = importance_chart(&ranked).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains(CHART_TITLE));
        assert!(svg.contains("Phoneme Errors"));
        assert!(svg.contains("Comprehension Score"));
    }

    #[test]
    fn test_chart_with_uniform_importances() {
        let ranked = ranked_importances(&[1.0 / 6.0; 6]);
        let svg = importance_chart(&ranked).unwrap();
        assert!(svg.contains("<rect"));
    }
}
