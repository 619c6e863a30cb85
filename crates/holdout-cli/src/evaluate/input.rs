//! Configuration for the `evaluate` subcommand.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use holdout_classifiers::config::{ModelConfig, PipelineConfig, SplitConfig};
use holdout_classifiers::datasets::IRIS_TARGET_COLUMN;

/// Everything one evaluation run needs. `data = None` means the bundled iris set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateConfig {
    pub data: Option<PathBuf>,
    pub target_column: String,
    pub split: SplitConfig,
    pub model: ModelConfig,
    pub classification_report: bool,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            data: None,
            target_column: IRIS_TARGET_COLUMN.to_string(),
            split: SplitConfig::default(),
            model: ModelConfig::default(),
            classification_report: false,
        }
    }
}

impl EvaluateConfig {
    /// Start from the config file (or defaults) and apply command-line overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                log::info!("Using config: {:?}", path);
                load_evaluate_config(path)?
            }
            None => {
                log::info!("No config provided; using defaults.");
                EvaluateConfig::default()
            }
        };
        config.apply_overrides(matches)?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(data) = matches.get_one::<PathBuf>("data") {
            self.data = Some(data.clone());
        }
        if let Some(data) = &self.data {
            validate_csv_file(data)?;
        }

        if let Some(target) = matches.get_one::<String>("target") {
            self.target_column = target.clone();
        }

        if let Some(&seed) = matches.get_one::<u64>("seed") {
            self.split.seed = seed;
        }

        if let Some(&fraction) = matches.get_one::<f64>("test_fraction") {
            self.split.test_fraction = fraction;
        }

        if let Some(&iterations) = matches.get_one::<usize>("max_iterations") {
            self.model.model_type = self.model.model_type.with_max_iterations(iterations);
        }

        if matches.get_flag("stratify") {
            self.split.stratify = true;
        }

        if matches.get_flag("report") {
            self.classification_report = true;
        }

        Ok(())
    }

    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            split: self.split.clone(),
            model: self.model.clone(),
        }
    }
}

/// Load an evaluation configuration from a JSON file.
pub fn load_evaluate_config<P: AsRef<Path>>(path: P) -> Result<EvaluateConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: EvaluateConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

pub fn validate_csv_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    if ext.as_deref() != Some("csv") {
        anyhow::bail!("Data file must have a .csv extension: {}", path.display());
    }
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    Ok(())
}
