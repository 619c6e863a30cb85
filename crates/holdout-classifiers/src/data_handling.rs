//! Train/test partitioning of a labeled dataset.
//!
//! Both splitters draw a single permutation from a `StdRng` seeded with the
//! caller's seed, so the same seed always yields the same partition. Rows
//! keep their feature/label pairing and the original row indices are kept
//! on the `Split` for inspection.
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SplitConfig;
use crate::datasets::Dataset;
use crate::error::{ClassifierError, Result};

#[derive(Debug, Clone)]
pub struct Split {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
    /// Original row indices of the training rows, in split order.
    pub train_indices: Vec<usize>,
    /// Original row indices of the test rows, in split order.
    pub test_indices: Vec<usize>,
}

impl Split {
    fn from_indices(
        x: &Array2<f64>,
        y: &Array1<usize>,
        train_indices: Vec<usize>,
        test_indices: Vec<usize>,
    ) -> Result<Self> {
        if train_indices.is_empty() || test_indices.is_empty() {
            return Err(ClassifierError::EmptyData(
                "split leaves an empty train or test set",
            ));
        }
        Ok(Split {
            x_train: x.select(Axis(0), &train_indices),
            x_test: x.select(Axis(0), &test_indices),
            y_train: y.select(Axis(0), &train_indices),
            y_test: y.select(Axis(0), &test_indices),
            train_indices,
            test_indices,
        })
    }

    pub fn n_train(&self) -> usize {
        self.train_indices.len()
    }

    pub fn n_test(&self) -> usize {
        self.test_indices.len()
    }
}

/// Number of test rows for `n` samples: `ceil(test_fraction * n)`.
fn test_count(n: usize, test_fraction: f64) -> usize {
    ((test_fraction * n as f64).ceil() as usize).min(n)
}

fn validate_inputs(x: &Array2<f64>, y: &Array1<usize>, test_fraction: f64) -> Result<()> {
    // Written so that NaN is rejected too.
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ClassifierError::InvalidFraction(test_fraction));
    }
    if x.nrows() != y.len() {
        return Err(ClassifierError::ShapeMismatch {
            expected: format!("{} labels", x.nrows()),
            got: format!("{} labels", y.len()),
        });
    }
    if x.nrows() == 0 {
        return Err(ClassifierError::EmptyData("cannot split a dataset with no rows"));
    }
    Ok(())
}

/// Randomly partition rows into train and test subsets.
///
/// The row indices are shuffled once; the first `n - n_test` shuffled rows
/// become the training set and the remaining `n_test` rows the test set.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<usize>,
    test_fraction: f64,
    seed: u64,
) -> Result<Split> {
    validate_inputs(x, y, test_fraction)?;

    let n_samples = x.nrows();
    let n_test = test_count(n_samples, test_fraction);
    let n_train = n_samples - n_test;

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_indices = indices.split_off(n_train);
    Split::from_indices(x, y, indices, test_indices)
}

/// Partition rows so that every class contributes `ceil(test_fraction * count)`
/// rows to the test set.
///
/// Classes are visited in index order and each class's rows are shuffled with
/// the same seeded generator.
pub fn stratified_train_test_split(
    x: &Array2<f64>,
    y: &Array1<usize>,
    test_fraction: f64,
    seed: u64,
) -> Result<Split> {
    validate_inputs(x, y, test_fraction)?;

    let n_classes = y.iter().max().map_or(0, |&m| m + 1);
    let mut per_class: Vec<Vec<usize>> = vec![Vec::new(); n_classes];
    for (row, &label) in y.iter().enumerate() {
        per_class[label].push(row);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_indices = Vec::with_capacity(x.nrows());
    let mut test_indices = Vec::new();

    for mut rows in per_class.into_iter().filter(|rows| !rows.is_empty()) {
        rows.shuffle(&mut rng);
        let n_test = test_count(rows.len(), test_fraction);
        let n_train = rows.len() - n_test;
        test_indices.extend_from_slice(&rows[n_train..]);
        train_indices.extend_from_slice(&rows[..n_train]);
    }

    Split::from_indices(x, y, train_indices, test_indices)
}

/// Split a dataset according to `config`.
pub fn split_dataset(dataset: &Dataset, config: &SplitConfig) -> Result<Split> {
    let split = if config.stratify {
        stratified_train_test_split(&dataset.x, &dataset.y, config.test_fraction, config.seed)?
    } else {
        train_test_split(&dataset.x, &dataset.y, config.test_fraction, config.seed)?
    };

    log::info!(
        "Split {} rows into {} train / {} test (test_fraction={}, seed={}, stratify={})",
        dataset.nrows(),
        split.n_train(),
        split.n_test(),
        config.test_fraction,
        config.seed,
        config.stratify
    );

    Ok(split)
}
