//! Mock training-data provider

use crate::errors::{ActionError, ActionResult};
use crate::providers::{Payload, Provider, TrainingData};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct MockProvider {
    data: Option<TrainingData>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Provider returning `train.jsonl` and `valid.jsonl`
    pub fn new() -> Self {
        Self::with_data(
            TrainingData::new(Payload::new("train.jsonl", "train data"))
                .with_validation(Payload::new("valid.jsonl", "valid data")),
        )
    }

    pub fn with_data(data: TrainingData) -> Self {
        Self {
            data: Some(data),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Provider whose build fails
    pub fn failing() -> Self {
        Self {
            data: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn build_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn id(&self) -> &str {
        "mock"
    }

    async fn build(&self) -> ActionResult<TrainingData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.data
            .clone()
            .ok_or_else(|| ActionError::Deserialization("mock provider failure".to_string()))
    }
}
