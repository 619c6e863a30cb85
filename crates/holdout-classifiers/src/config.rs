use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ModelConfig {
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    /// Multinomial logistic regression (linfa-logistic, L-BFGS).
    LogisticRegression {
        /// Upper bound on optimizer iterations.
        max_iterations: usize,
        /// L2 penalty strength on the weights (inverse of `C`).
        alpha: f64,
        /// Gradient norm at which the optimizer stops.
        tolerance: f64,
    },
}

impl ModelType {
    pub fn logistic_regression() -> Self {
        ModelType::LogisticRegression {
            max_iterations: 200,
            alpha: 1.0,
            tolerance: 1e-4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression { .. } => "logistic_regression",
        }
    }

    /// Return a copy with the iteration budget replaced.
    pub fn with_max_iterations(&self, iterations: usize) -> Self {
        match self {
            ModelType::LogisticRegression {
                alpha, tolerance, ..
            } => ModelType::LogisticRegression {
                max_iterations: iterations,
                alpha: *alpha,
                tolerance: *tolerance,
            },
        }
    }
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::logistic_regression()
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" | "logreg" | "logistic_regression" => Ok(ModelType::logistic_regression()),
            _ => Err(format!(
                "Unknown model type: {}. Supported: logistic_regression",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(model_type: ModelType) -> Self {
        Self { model_type }
    }
}

/// How rows are partitioned into train and test subsets.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of rows assigned to the test set, in (0, 1).
    pub test_fraction: f64,
    /// Seed for the row permutation.
    pub seed: u64,
    /// Preserve class proportions in both subsets.
    pub stratify: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            stratify: false,
        }
    }
}

/// Split and model settings for one evaluation run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub split: SplitConfig,
    pub model: ModelConfig,
}
