//! The hold-out evaluation workflow.
//!
//! Stages run strictly in order: split, fit the scaler on the training rows,
//! scale both subsets with that one scaler, fit the classifier, predict the
//! test rows and score the predictions.
use ndarray::Array1;

use crate::config::PipelineConfig;
use crate::data_handling::split_dataset;
use crate::datasets::Dataset;
use crate::error::Result;
use crate::metrics::{accuracy, ConfusionMatrix};
use crate::models::classifier_trait::FitSummary;
use crate::models::factory::build_model;
use crate::preprocessing::Scaler;

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
    pub class_names: Vec<String>,
    pub y_test: Array1<usize>,
    pub predictions: Array1<usize>,
    pub scaler: Scaler,
    pub n_train: usize,
    pub model_name: String,
    pub fit_summary: Option<FitSummary>,
}

impl Evaluation {
    pub fn n_test(&self) -> usize {
        self.y_test.len()
    }
}

pub fn run_pipeline(dataset: &Dataset, config: &PipelineConfig) -> Result<Evaluation> {
    dataset.log_summary();

    let split = split_dataset(dataset, &config.split)?;

    let scaler = Scaler::fit(&split.x_train)?;
    let x_train = scaler.transform(&split.x_train)?;
    let x_test = scaler.transform(&split.x_test)?;
    log::debug!("Scaler mean={:?} std={:?}", scaler.mean, scaler.std);

    let mut model = build_model(config.model.clone());
    model.fit(&x_train, &split.y_train, dataset.n_classes())?;
    let predictions = model.predict(&x_test)?;

    let acc = accuracy(&split.y_test, &predictions)?;
    let confusion = ConfusionMatrix::new(&split.y_test, &predictions, dataset.n_classes())?;
    log::info!(
        "{} scored {:.4} accuracy on {} test rows",
        model.name(),
        acc,
        split.n_test()
    );

    Ok(Evaluation {
        accuracy: acc,
        confusion,
        class_names: dataset.class_names.clone(),
        y_test: split.y_test,
        predictions,
        scaler,
        n_train: split.train_indices.len(),
        model_name: model.name().to_string(),
        fit_summary: model.fit_summary().cloned(),
    })
}
