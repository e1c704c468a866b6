use thiserror::Error;

use rentalgen_generate::GenerationError;

/// Errors emitted while summarizing a dataset.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("run directory not found: {0}")]
    MissingRun(String),
    #[error("failed to load dataset: {0}")]
    Load(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
