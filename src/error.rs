//! Error types for tasksift.
//!
//! Parsing itself never fails; these cover reading input, decoding task
//! JSON and loading configuration.

use thiserror::Error;

/// Errors raised around the parser: I/O, JSON and configuration.
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}
