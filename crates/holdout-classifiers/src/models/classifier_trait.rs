use ndarray::{Array1, Array2};

use crate::error::Result;

/// Optimizer outcome recorded on a fitted model.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary {
    /// Iteration budget the optimizer was given.
    pub max_iterations: usize,
    /// L2 norm of the training objective's gradient at the fitted
    /// parameters, divided by the number of training rows.
    pub gradient_norm: f64,
    /// `gradient_norm` is within the configured tolerance.
    pub converged: bool,
}

/// Contract shared by the classifiers in this crate.
///
/// Labels are class indices in `0..n_classes`. `n_classes` is passed
/// explicitly because a training subset may not contain every class.
pub trait ClassifierModel {
    /// Fit the model on `x` (rows are samples) and labels `y`.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>, n_classes: usize) -> Result<()>;

    /// Predict one class index per row.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>>;

    /// Per-class probabilities, one row per sample; rows sum to 1.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>>;

    /// How the last `fit` ended, for models fit by iterative optimization.
    fn fit_summary(&self) -> Option<&FitSummary> {
        None
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
