// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },
    #[error("Empty series for entity {0}")]
    EmptySeries(String),
    #[error("Entity store is empty, nothing to aggregate")]
    EmptyStore,
    #[error("Task failed: {0}")]
    TaskFailed(String),
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
    #[error("Output error: {0}")]
    Output(String),
}

impl PipelineError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, PipelineError::InvalidConfig(_) | PipelineError::InvalidRange { .. })
    }

    pub(crate) fn from_panic(context: &str, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        PipelineError::TaskFailed(format!("{}: {}", context, message))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
