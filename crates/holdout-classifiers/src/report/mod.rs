//! Text rendering of evaluation results.
//!
//! The report is two blocks: an accuracy line formatted as a percentage
//! with two decimals, then the confusion matrix labeled by class name
//! (rows are true classes, columns predicted classes). An optional
//! per-class precision/recall table can follow.
pub mod table;

use crate::metrics::ConfusionMatrix;
use crate::pipeline::Evaluation;

pub use table::TextTable;

/// `Accuracy: 96.67%`
pub fn render_accuracy(accuracy: f64) -> String {
    format!("Accuracy: {:.2}%", accuracy * 100.0)
}

pub fn render_confusion_matrix(cm: &ConfusionMatrix, class_names: &[String]) -> String {
    let mut table = TextTable::new(class_names.iter().cloned());
    for (name, row) in class_names.iter().zip(cm.counts().outer_iter()) {
        table.add_row(name.as_str(), row.iter().map(|v| v.to_string()).collect());
    }
    table.render()
}

pub fn render_classification_report(cm: &ConfusionMatrix, class_names: &[String]) -> String {
    let mut table = TextTable::new(["precision", "recall", "f1-score", "support"]);
    for (name, m) in class_names.iter().zip(cm.class_metrics()) {
        table.add_row(
            name.as_str(),
            vec![
                format!("{:.2}", m.precision),
                format!("{:.2}", m.recall),
                format!("{:.2}", m.f1),
                m.support.to_string(),
            ],
        );
    }
    table.render()
}

/// Full stdout report for an evaluation.
pub fn render_report(evaluation: &Evaluation, include_class_report: bool) -> String {
    let mut out = render_accuracy(evaluation.accuracy);
    out.push_str("\n\nConfusion Matrix:\n");
    out.push_str(&render_confusion_matrix(
        &evaluation.confusion,
        &evaluation.class_names,
    ));
    if include_class_report {
        out.push_str("\n\nClassification Report:\n");
        out.push_str(&render_classification_report(
            &evaluation.confusion,
            &evaluation.class_names,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn names() -> Vec<String> {
        vec!["setosa".into(), "versicolor".into(), "virginica".into()]
    }

    #[test]
    fn test_accuracy_two_decimals() {
        assert_eq!(render_accuracy(29.0 / 30.0), "Accuracy: 96.67%");
        assert_eq!(render_accuracy(1.0), "Accuracy: 100.00%");
    }

    #[test]
    fn test_confusion_matrix_table() {
        let t = array![0, 1, 1, 2, 2];
        let p = array![0, 1, 2, 2, 2];
        let cm = ConfusionMatrix::new(&t, &p, 3).unwrap();
        let text = render_confusion_matrix(&cm, &names());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "            setosa  versicolor  virginica");
        assert_eq!(lines[1], "setosa           1           0          0");
        assert_eq!(lines[2], "versicolor       0           1          1");
        assert_eq!(lines[3], "virginica        0           0          2");
    }

    #[test]
    fn test_classification_report_has_row_per_class() {
        let t = array![0, 1, 2];
        let p = array![0, 1, 1];
        let cm = ConfusionMatrix::new(&t, &p, 3).unwrap();
        let text = render_classification_report(&cm, &names());
        assert!(text.lines().next().unwrap().contains("precision"));
        assert!(text.contains("versicolor"));
        assert_eq!(text.lines().count(), 4);
    }
}
