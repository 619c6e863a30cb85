//! Feature standardization.
//!
//! `Scaler` learns per-column mean and population standard deviation from
//! training rows and applies `(x - mean) / std` to any matrix with the same
//! number of columns. The fitted state is never touched by `transform`, so the
//! test set is always scaled with training statistics.

use ndarray::{Array1, Array2, Axis};

use crate::error::{ClassifierError, Result};

/// Per-column standard scaler.
#[derive(Clone, Debug, PartialEq)]
pub struct Scaler {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl Scaler {
    /// Fit on `x` (rows are samples, columns are features).
    ///
    /// Columns with (numerically) zero variance keep a scale of 1.0 so they
    /// are centered but not blown up; a warning names each such column.
    pub fn fit(x: &Array2<f64>) -> Result<Self> {
        let (nrows, ncols) = x.dim();
        if nrows == 0 || ncols == 0 {
            return Err(ClassifierError::EmptyData("scaler requires a non-empty matrix"));
        }

        let mean = x
            .mean_axis(Axis(0))
            .ok_or(ClassifierError::EmptyData("scaler requires a non-empty matrix"))?;
        let mut std = x.std_axis(Axis(0), 0.0);

        for (col, (s, m)) in std.iter_mut().zip(mean.iter()).enumerate() {
            if *s <= 10.0 * f64::EPSILON * m.abs().max(1.0) {
                log::warn!(
                    "Feature column {} has zero variance in the training data; leaving it unscaled",
                    col
                );
                *s = 1.0;
            }
        }

        Ok(Scaler { mean, std })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardize `x` with the fitted statistics.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.n_features() {
            return Err(ClassifierError::ShapeMismatch {
                expected: format!("{} columns", self.n_features()),
                got: format!("{} columns", x.ncols()),
            });
        }
        Ok((x - &self.mean) / &self.std)
    }
}

/// Fit a `Scaler` from `x`.
pub fn fit_scaler(x: &Array2<f64>) -> Result<Scaler> {
    Scaler::fit(x)
}

/// Transform all rows of `x` with an already fitted scaler.
pub fn transform_all(x: &Array2<f64>, sc: &Scaler) -> Result<Array2<f64>> {
    sc.transform(x)
}

/// Fit on `x` and return both the scaler and the standardized `x`.
pub fn fit_transform(x: &Array2<f64>) -> Result<(Scaler, Array2<f64>)> {
    let sc = Scaler::fit(x)?;
    let scaled = sc.transform(x)?;
    Ok((sc, scaled))
}
