//! Classification metrics: accuracy, confusion matrix and per-class scores.
//!
//! Accuracy comes from linfa's confusion matrix. linfa keeps its matrix and
//! class order private and drops classes that never occur, so the labeled
//! `num_classes x num_classes` table and the per-class scores derived from it
//! are tallied here.
use linfa::metrics::ToConfusionMatrix;
use linfa::DatasetBase;
use ndarray::{Array1, Array2, Axis};

use crate::error::{ClassifierError, Result};

fn check_lengths(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::ShapeMismatch {
            expected: format!("{} predictions", y_true.len()),
            got: format!("{} predictions", y_pred.len()),
        });
    }
    if y_true.is_empty() {
        return Err(ClassifierError::EmptyData("no labels to evaluate"));
    }
    Ok(())
}

/// Fraction of positions where `y_pred` equals `y_true`.
pub fn accuracy(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let ground_truth = DatasetBase::new(Array2::<f64>::zeros((y_true.len(), 0)), y_true.clone());
    let cm = <Array1<usize> as ToConfusionMatrix<usize, _>>::confusion_matrix(y_pred, &ground_truth)?;
    Ok(cm.accuracy() as f64)
}

/// `num_classes x num_classes` counts; entry (i, j) is the number of rows
/// whose true class is i and predicted class is j.
pub fn confusion_matrix(
    y_true: &Array1<usize>,
    y_pred: &Array1<usize>,
    num_classes: usize,
) -> Result<Array2<usize>> {
    check_lengths(y_true, y_pred)?;
    let mut counts = Array2::<usize>::zeros((num_classes, num_classes));
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        for label in [t, p] {
            if label >= num_classes {
                return Err(ClassifierError::InvalidLabel {
                    label,
                    n_classes: num_classes,
                });
            }
        }
        counts[(t, p)] += 1;
    }
    Ok(counts)
}

/// Precision / recall / F1 for one class, plus its support (true count).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// A confusion matrix with derived per-class scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    counts: Array2<usize>,
}

impl ConfusionMatrix {
    pub fn new(y_true: &Array1<usize>, y_pred: &Array1<usize>, num_classes: usize) -> Result<Self> {
        Ok(ConfusionMatrix {
            counts: confusion_matrix(y_true, y_pred, num_classes)?,
        })
    }

    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    pub fn n_classes(&self) -> usize {
        self.counts.nrows()
    }

    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    /// Row sums: number of true instances of each class.
    pub fn support(&self) -> Array1<usize> {
        self.counts.sum_axis(Axis(1))
    }

    /// Rows whose prediction matched (the diagonal).
    pub fn correct(&self) -> usize {
        self.counts.diag().sum()
    }

    /// Scores per class; ratios with a zero denominator are reported as 0.0.
    pub fn class_metrics(&self) -> Vec<ClassMetrics> {
        let predicted = self.counts.sum_axis(Axis(0));
        let support = self.support();
        (0..self.n_classes())
            .map(|c| {
                let tp = self.counts[(c, c)] as f64;
                let precision = ratio(tp, predicted[c] as f64);
                let recall = ratio(tp, support[c] as f64);
                let f1 = ratio(2.0 * precision * recall, precision + recall);
                ClassMetrics {
                    precision,
                    recall,
                    f1,
                    support: support[c],
                }
            })
            .collect()
    }
}

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
