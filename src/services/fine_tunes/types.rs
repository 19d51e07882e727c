use serde::{Deserialize, Serialize};

/// Body of `POST /fine-tunes`.
///
/// Hyperparameters left as `None` are sent as explicit `null` so the service
/// applies its own defaults.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FineTuneRequest {
    pub training_file: String,
    pub validation_file: Option<String>,
    pub model: String,
    pub n_epochs: Option<u32>,
    pub batch_size: Option<u32>,
    pub learning_rate_multiplier: Option<f64>,
    pub prompt_loss_weight: Option<f64>,
    pub compute_classification_metrics: Option<bool>,
    pub classification_n_classes: Option<u32>,
    pub classification_positive_class: Option<String>,
    pub classification_betas: Option<Vec<f64>>,
    pub suffix: Option<String>,
}

impl FineTuneRequest {
    pub fn new(
        model: impl Into<String>,
        training_file: impl Into<String>,
        validation_file: Option<String>,
    ) -> Self {
        Self {
            training_file: training_file.into(),
            validation_file,
            model: model.into(),
            n_epochs: None,
            batch_size: None,
            learning_rate_multiplier: None,
            prompt_loss_weight: None,
            compute_classification_metrics: None,
            classification_n_classes: None,
            classification_positive_class: None,
            classification_betas: None,
            suffix: None,
        }
    }
}

/// A fine-tune job as returned when it is created.
///
/// Only the fields the run reads are decoded, each tolerating `null` or
/// absence; the raw response body stays in [`ApiResponse::body`].
///
/// [`ApiResponse::body`]: crate::services::ApiResponse
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FineTuneJob {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Null until the job has finished training.
    #[serde(default)]
    pub fine_tuned_model: Option<String>,
}

impl FineTuneJob {
    /// The model id to publish; empty while none has been assigned.
    pub fn model_id(&self) -> &str {
        self.fine_tuned_model.as_deref().unwrap_or("")
    }

    pub fn job_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
