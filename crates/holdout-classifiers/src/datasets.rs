//! Labeled tabular datasets and the bundled iris data.
//!
//! A `Dataset` owns a dense feature matrix (rows are samples), a vector of
//! class indices and the names needed to render results. Construction
//! checks that the pieces agree so the downstream stages can index freely.
use ndarray::{Array1, Array2};

use crate::error::{ClassifierError, Result};
use crate::io::read_labeled_csv_from_reader;

const IRIS_CSV: &str = include_str!("../data/iris.csv");

/// Name of the label column in the bundled iris CSV.
pub const IRIS_TARGET_COLUMN: &str = "species";

#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature matrix, one row per sample.
    pub x: Array2<f64>,
    /// Class index per row; indexes into `class_names`.
    pub y: Array1<usize>,
    /// Human-readable class names, ordered by class index.
    pub class_names: Vec<String>,
    /// Column names, one per feature.
    pub feature_names: Vec<String>,
}

impl Dataset {
    pub fn new(
        x: Array2<f64>,
        y: Array1<usize>,
        class_names: Vec<String>,
        feature_names: Vec<String>,
    ) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: format!("{} labels", x.nrows()),
                got: format!("{} labels", y.len()),
            });
        }
        if feature_names.len() != x.ncols() {
            return Err(ClassifierError::ShapeMismatch {
                expected: format!("{} feature names", x.ncols()),
                got: format!("{} feature names", feature_names.len()),
            });
        }
        if let Some(&label) = y.iter().find(|&&label| label >= class_names.len()) {
            return Err(ClassifierError::InvalidLabel {
                label,
                n_classes: class_names.len(),
            });
        }

        Ok(Dataset {
            x,
            y,
            class_names,
            feature_names,
        })
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    pub fn n_classes(&self) -> usize {
        self.class_names.len()
    }

    /// Number of rows carrying each class index.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes()];
        for &label in self.y.iter() {
            counts[label] += 1;
        }
        counts
    }

    pub fn log_summary(&self) {
        log::info!(
            "Dataset: {} rows, {} features, {} classes",
            self.nrows(),
            self.ncols(),
            self.n_classes()
        );
        for (name, count) in self.class_names.iter().zip(self.class_counts()) {
            log::debug!("  class '{}': {} rows", name, count);
        }
    }
}

/// Load the bundled iris dataset (150 rows, 4 features, 3 classes).
pub fn load_iris() -> Result<Dataset> {
    read_labeled_csv_from_reader(IRIS_CSV.as_bytes(), IRIS_TARGET_COLUMN)
}
