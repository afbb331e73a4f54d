//! Evaluation metrics for the held-out split

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::logic::dataset::Label;

/// Fraction of predictions equal to the truth (0.0 for empty input)
pub fn accuracy_score(truth: &[Label], predicted: &[Label]) -> f64 {
    debug_assert_eq!(truth.len(), predicted.len());
    if truth.is_empty() {
        return 0.0;
    }
    let correct = truth.iter().zip(predicted.iter()).filter(|(t, p)| t == p).count();
    correct as f64 / truth.len() as f64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Indexed by `Label::index()`
    pub classes: [ClassMetrics; 2],
    pub accuracy: f64,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    /// Precision, recall and F1 per class; undefined ratios count as 0
    pub fn new(truth: &[Label], predicted: &[Label]) -> Self {
        let classes = Label::ALL.map(|label| class_metrics(label, truth, predicted));
        let total = truth.len();

        let macro_avg = ClassMetrics {
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / 2.0,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / 2.0,
            f1: classes.iter().map(|c| c.f1).sum::<f64>() / 2.0,
            support: total,
        };

        let weight = |c: &ClassMetrics| if total == 0 { 0.0 } else { c.support as f64 / total as f64 };
        let weighted_avg = ClassMetrics {
            precision: classes.iter().map(|c| c.precision * weight(c)).sum(),
            recall: classes.iter().map(|c| c.recall * weight(c)).sum(),
            f1: classes.iter().map(|c| c.f1 * weight(c)).sum(),
            support: total,
        };

        Self {
            classes,
            accuracy: accuracy_score(truth, predicted),
            macro_avg,
            weighted_avg,
        }
    }
}

fn class_metrics(label: Label, truth: &[Label], predicted: &[Label]) -> ClassMetrics {
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;

    for (t, p) in truth.iter().zip(predicted.iter()) {
        match (*t == label, *p == label) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }

    let ratio = |num: usize, den: usize| if den == 0 { 0.0 } else { num as f64 / den as f64 };
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ClassMetrics {
        precision,
        recall,
        f1,
        support: tp + fn_,
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12} {:>10} {:>10} {:>10} {:>10}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f)?;
        for (label, metrics) in Label::ALL.iter().zip(self.classes.iter()) {
            writeln!(
                f,
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                label.index(),
                metrics.precision,
                metrics.recall,
                metrics.f1,
                metrics.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (name, metrics) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, metrics.precision, metrics.recall, metrics.f1, metrics.support
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dataset::Label::{Dyslexia as D, NoDyslexia as N};

    #[test]
    fn test_accuracy_score() {
        assert_eq!(accuracy_score(&[N, D, D, N], &[N, D, N, N]), 0.75);
        assert_eq!(accuracy_score(&[], &[]), 0.0);
    }

    #[test]
    fn test_report_values() {
        let truth = [N, N, N, D, D];
        let predicted = [N, N, D, D, N];
        let report = ClassificationReport::new(&truth, &predicted);

        let negative = &report.classes[0];
        assert!((negative.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((negative.recall - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(negative.support, 3);

        let positive = &report.classes[1];
        assert!((positive.precision - 0.5).abs() < 1e-12);
        assert!((positive.recall - 0.5).abs() < 1e-12);
        assert_eq!(positive.support, 2);

        assert!((report.accuracy - 0.6).abs() < 1e-12);
        assert_eq!(report.macro_avg.support, 5);
        let expected_weighted = (2.0 / 3.0) * 0.6 + 0.5 * 0.4;
        assert!((report.weighted_avg.precision - expected_weighted).abs() < 1e-12);
    }

    #[test]
    fn test_zero_division_is_zero() {
        let report = ClassificationReport::new(&[N, N], &[N, N]);
        assert_eq!(report.classes[1].precision, 0.0);
        assert_eq!(report.classes[1].recall, 0.0);
        assert_eq!(report.classes[1].f1, 0.0);
        assert_eq!(report.classes[1].support, 0);
    }

    #[test]
    fn test_display_table() {
        let report = ClassificationReport::new(&[N, D], &[N, D]);
        let text = report.to_string();
        assert!(text.contains("precision"));
        assert!(text.contains("accuracy"));
        assert!(text.contains("macro avg"));
        assert!(text.contains("weighted avg"));
        assert!(text.contains("1.00"));
    }
}
