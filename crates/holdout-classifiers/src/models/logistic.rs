//! Multinomial logistic regression backed by `linfa-logistic`.
//!
//! linfa minimizes the summed softmax cross-entropy plus
//! `alpha / 2 * ||W||^2` (the intercept is not penalized) with L-BFGS,
//! starting from zero. After the fit the gradient of that objective is
//! evaluated on the training rows; a fit that stopped above the tolerance is
//! reported through [`FitSummary::converged`] and a warning, not as an error.
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_logistic::{MultiFittedLogisticRegression, MultiLogisticRegression};
use ndarray::{Array1, Array2, Axis};

use crate::config::{ModelConfig, ModelType};
use crate::error::{ClassifierError, Result};
use crate::models::classifier_trait::{ClassifierModel, FitSummary};

/// A fitted linfa model plus the class bookkeeping needed to report
/// probabilities over every class of the dataset.
pub struct FittedLogisticRegression {
    model: MultiFittedLogisticRegression<f64, usize>,
    /// Sorted class indices present in the training labels. linfa orders its
    /// probability columns the same way.
    classes: Vec<usize>,
    n_classes: usize,
    summary: FitSummary,
}

impl FittedLogisticRegression {
    /// `n_features x n_trained_classes`
    pub fn weights(&self) -> &Array2<f64> {
        self.model.params()
    }

    pub fn summary(&self) -> &FitSummary {
        &self.summary
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Class indices the model was trained on.
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    fn check_width(&self, x: &Array2<f64>) -> Result<()> {
        let n_features = self.model.params().nrows();
        if x.ncols() != n_features {
            return Err(ClassifierError::ShapeMismatch {
                expected: format!("{} columns", n_features),
                got: format!("{} columns", x.ncols()),
            });
        }
        Ok(())
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        self.check_width(x)?;
        let predictions: Array1<usize> = self.model.predict(x);
        Ok(predictions)
    }

    /// Probabilities over all `n_classes`; classes absent from training get 0.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_width(x)?;
        let trained = self.model.predict_probabilities(x);
        let mut probs = Array2::zeros((x.nrows(), self.n_classes));
        for (col, &class) in self.classes.iter().enumerate() {
            probs.column_mut(class).assign(&trained.column(col));
        }
        Ok(probs)
    }
}

pub struct LogisticRegression {
    params: ModelConfig,
    model: Option<FittedLogisticRegression>,
}

impl LogisticRegression {
    pub fn new(params: ModelConfig) -> Self {
        LogisticRegression {
            params,
            model: None,
        }
    }

    pub fn fitted(&self) -> Option<&FittedLogisticRegression> {
        self.model.as_ref()
    }

    fn fitted_or_err(&self) -> Result<&FittedLogisticRegression> {
        self.model.as_ref().ok_or(ClassifierError::NotFitted)
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

impl ClassifierModel for LogisticRegression {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>, n_classes: usize) -> Result<()> {
        let ModelType::LogisticRegression {
            max_iterations,
            alpha,
            tolerance,
        } = self.params.model_type;

        let (n_samples, n_features) = x.dim();
        if n_samples == 0 || n_features == 0 {
            return Err(ClassifierError::EmptyData(
                "logistic regression needs at least one row and one feature",
            ));
        }
        if y.len() != n_samples {
            return Err(ClassifierError::ShapeMismatch {
                expected: format!("{} labels", n_samples),
                got: format!("{} labels", y.len()),
            });
        }
        if n_classes < 2 {
            return Err(ClassifierError::TooFewClasses(n_classes));
        }
        if let Some(&label) = y.iter().find(|&&label| label >= n_classes) {
            return Err(ClassifierError::InvalidLabel { label, n_classes });
        }

        let mut classes = y.to_vec();
        classes.sort_unstable();
        classes.dedup();
        if classes.len() < 2 {
            return Err(ClassifierError::TooFewClasses(classes.len()));
        }
        if classes.len() < n_classes {
            log::warn!(
                "Training labels cover {} of {} classes; missing classes get probability 0",
                classes.len(),
                n_classes
            );
        }

        log::info!(
            "Fitting logistic regression: {} rows x {} features, {} classes (max_iterations={}, alpha={})",
            n_samples,
            n_features,
            n_classes,
            max_iterations,
            alpha
        );

        let dataset = Dataset::new(x.to_owned(), y.to_owned());
        let model = MultiLogisticRegression::default()
            .alpha(alpha)
            .gradient_tolerance(tolerance)
            .max_iterations(max_iterations as u64)
            .fit(&dataset)?;

        let gradient_norm = gradient_norm_per_row(&model, x, y, &classes, alpha);
        let summary = FitSummary {
            max_iterations,
            gradient_norm,
            converged: gradient_norm <= tolerance,
        };

        if summary.converged {
            log::info!(
                "Logistic regression converged (|grad|/n={:.3e})",
                summary.gradient_norm
            );
        } else {
            log::warn!(
                "Logistic regression failed to converge within {} iterations (|grad|/n={:.3e} > {:.1e}); \
                 increase max_iterations or rescale the features",
                max_iterations,
                summary.gradient_norm,
                tolerance
            );
        }

        self.model = Some(FittedLogisticRegression {
            model,
            classes,
            n_classes,
            summary,
        });
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        self.fitted_or_err()?.predict(x)
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.fitted_or_err()?.predict_proba(x)
    }

    fn fit_summary(&self) -> Option<&FitSummary> {
        self.model.as_ref().map(|m| &m.summary)
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}

/// Gradient of linfa's penalized objective at the fitted parameters:
/// `X^T (P - Y) + alpha W` for the weights and `sum(P - Y)` for the intercept.
fn gradient_norm_per_row(
    model: &MultiFittedLogisticRegression<f64, usize>,
    x: &Array2<f64>,
    y: &Array1<usize>,
    classes: &[usize],
    alpha: f64,
) -> f64 {
    let mut residual = model.predict_probabilities(x);
    for (mut row, label) in residual.outer_iter_mut().zip(y.iter()) {
        if let Ok(col) = classes.binary_search(label) {
            row[col] -= 1.0;
        }
    }
    let grad_w = x.t().dot(&residual) + &(model.params() * alpha);
    let grad_b = residual.sum_axis(Axis(0));
    let squared: f64 = grad_w.iter().chain(grad_b.iter()).map(|g| g * g).sum();
    squared.sqrt() / x.nrows() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn blobs() -> (Array2<f64>, Array1<usize>) {
        let x = array![
            [-2.0, -2.0],
            [-2.2, -1.8],
            [-1.9, -2.1],
            [2.0, 2.0],
            [2.1, 1.9],
            [1.8, 2.2],
            [2.0, -2.0],
            [2.2, -1.9],
            [1.9, -2.2],
        ];
        let y = array![0, 0, 0, 1, 1, 1, 2, 2, 2];
        (x, y)
    }

    #[test]
    fn test_fits_separable_blobs() {
        let (x, y) = blobs();
        let mut model = LogisticRegression::default();
        model.fit(&x, &y, 3).unwrap();
        let pred = model.predict(&x).unwrap();
        assert_eq!(pred, y);
        let summary = model.fitted().unwrap().summary();
        assert!(summary.converged, "{:?}", summary);
        assert_eq!(model.fitted().unwrap().weights().dim(), (2, 3));
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (x, y) = blobs();
        let mut model = LogisticRegression::default();
        model.fit(&x, &y, 3).unwrap();
        let proba = model.predict_proba(&x).unwrap();
        assert_eq!(proba.dim(), (9, 3));
        for (row, &label) in proba.outer_iter().zip(y.iter()) {
            assert!((row.sum() - 1.0).abs() < 1e-9);
            assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
            assert!(row[label] > 0.5);
        }
    }

    #[test]
    fn test_class_missing_from_training_gets_zero_probability() {
        let (x, y) = blobs();
        let keep = [0usize, 1, 2, 6, 7, 8];
        let x = x.select(Axis(0), &keep);
        let y = y.select(Axis(0), &keep);
        let mut model = LogisticRegression::default();
        model.fit(&x, &y, 3).unwrap();

        assert_eq!(model.fitted().unwrap().classes(), &[0, 2]);
        let proba = model.predict_proba(&x).unwrap();
        assert_eq!(proba.dim(), (6, 3));
        assert!(proba.column(1).iter().all(|&p| p == 0.0));
        assert!(model.predict(&x).unwrap().iter().all(|&c| c != 1));
    }

    #[test]
    fn test_iteration_budget_exhaustion_is_not_an_error() {
        let (x, y) = blobs();
        let params = ModelConfig::new(ModelType::logistic_regression().with_max_iterations(1));
        let mut model = LogisticRegression::new(params);
        model.fit(&x, &y, 3).unwrap();
        let summary = model.fitted().unwrap().summary();
        assert_eq!(summary.max_iterations, 1);
        assert!(!summary.converged);
        assert_eq!(model.predict(&x).unwrap().len(), 9);
    }

    #[test]
    fn test_predict_before_fit_errors() {
        let model = LogisticRegression::default();
        let err = model.predict(&array![[0.0, 0.0]]);
        assert!(matches!(err, Err(ClassifierError::NotFitted)));
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let (x, y) = blobs();
        let mut model = LogisticRegression::default();
        model.fit(&x, &y, 3).unwrap();
        let err = model.predict(&array![[0.0, 0.0, 0.0]]);
        assert!(matches!(err, Err(ClassifierError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_rejects_label_out_of_range() {
        let (x, _) = blobs();
        let y = array![0, 0, 0, 1, 1, 1, 2, 2, 5];
        let mut model = LogisticRegression::default();
        let err = model.fit(&x, &y, 3);
        assert!(matches!(
            err,
            Err(ClassifierError::InvalidLabel { label: 5, n_classes: 3 })
        ));
    }

    #[test]
    fn test_rejects_single_class_training_set() {
        let (x, _) = blobs();
        let y = Array1::zeros(9);
        let mut model = LogisticRegression::default();
        assert!(matches!(
            model.fit(&x, &y, 3),
            Err(ClassifierError::TooFewClasses(1))
        ));
    }
}
