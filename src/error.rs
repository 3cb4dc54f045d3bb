//! Error Types

use thiserror::Error;

/// User-facing task errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Blank or whitespace-only text submitted from the input field
    #[error("Please enter a task.")]
    EmptySubmission,
}

/// Embedded configuration errors (never fatal, defaults apply)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config element #{0} not found")]
    Missing(&'static str),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
