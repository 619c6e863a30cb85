//! Runs the hold-out workflow for the CLI.
use anyhow::{Context, Result};

use holdout_classifiers::datasets::{load_iris, Dataset};
use holdout_classifiers::io::read_labeled_csv;
use holdout_classifiers::pipeline::{run_pipeline, Evaluation};
use holdout_classifiers::report::render_report;

use super::input::EvaluateConfig;

/// The configured CSV, or the bundled iris data when none is set.
pub fn load_dataset(config: &EvaluateConfig) -> Result<Dataset> {
    match &config.data {
        Some(path) => {
            log::info!("Loading {} (target column '{}')", path.display(), config.target_column);
            read_labeled_csv(path, &config.target_column)
                .with_context(|| format!("Failed to load dataset: {}", path.display()))
        }
        None => {
            log::info!("Loading bundled iris dataset");
            load_iris().context("Failed to load bundled iris dataset")
        }
    }
}

pub fn run_evaluate(config: &EvaluateConfig) -> Result<Evaluation> {
    let dataset = load_dataset(config)?;
    let evaluation = run_pipeline(&dataset, &config.pipeline()).context("Evaluation failed")?;
    Ok(evaluation)
}

/// Run and render the stdout report.
pub fn evaluate_to_report(config: &EvaluateConfig) -> Result<String> {
    let evaluation = run_evaluate(config)?;
    Ok(render_report(&evaluation, config.classification_report))
}
