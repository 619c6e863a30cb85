use std::error::Error;
use std::fmt;

/// Errors raised while loading, splitting, scaling, fitting or scoring.
#[derive(Debug)]
pub enum ClassifierError {
    /// Array dimensions disagree (e.g. feature rows vs. label count).
    ShapeMismatch { expected: String, got: String },
    /// Test fraction outside the open interval (0, 1).
    InvalidFraction(f64),
    /// An operation received zero rows or zero columns.
    EmptyData(&'static str),
    /// A label is not a valid index into the class names.
    InvalidLabel { label: usize, n_classes: usize },
    /// Fewer than two classes were available for training.
    TooFewClasses(usize),
    /// The underlying estimator or metric computation failed.
    Model(String),
    /// Dataset could not be read or parsed.
    Dataset(String),
    /// A model was asked to predict before `fit` was called.
    NotFitted,
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::ShapeMismatch { expected, got } => {
                write!(f, "Shape mismatch: expected {}, got {}", expected, got)
            }
            ClassifierError::InvalidFraction(v) => {
                write!(f, "Test fraction must be in (0, 1), got {}", v)
            }
            ClassifierError::EmptyData(what) => write!(f, "Empty input: {}", what),
            ClassifierError::InvalidLabel { label, n_classes } => write!(
                f,
                "Label {} is out of range for {} classes",
                label, n_classes
            ),
            ClassifierError::TooFewClasses(n) => {
                write!(f, "At least two classes are required, found {}", n)
            }
            ClassifierError::Model(msg) => write!(f, "Model error: {}", msg),
            ClassifierError::Dataset(msg) => write!(f, "Dataset error: {}", msg),
            ClassifierError::NotFitted => write!(f, "Model must be fitted before predicting"),
        }
    }
}

impl Error for ClassifierError {}

impl From<csv::Error> for ClassifierError {
    fn from(err: csv::Error) -> Self {
        ClassifierError::Dataset(err.to_string())
    }
}

impl From<linfa::Error> for ClassifierError {
    fn from(err: linfa::Error) -> Self {
        ClassifierError::Model(err.to_string())
    }
}

impl From<linfa_logistic::error::Error> for ClassifierError {
    fn from(err: linfa_logistic::error::Error) -> Self {
        ClassifierError::Model(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
