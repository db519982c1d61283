//! Runner error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("no jobs in scope: {0}")]
    EmptyScope(String),

    #[error("receipt serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type RunResult<T> = Result<T, RunError>;
