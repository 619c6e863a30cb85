use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::logistic::LogisticRegression;

/// Build a boxed classifier model from a `ModelConfig`.
pub fn build_model(params: ModelConfig) -> Box<dyn ClassifierModel> {
    match params.model_type {
        ModelType::LogisticRegression { .. } => Box::new(LogisticRegression::new(params)),
    }
}
