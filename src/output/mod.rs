//! Output formatting for tasksift.
//!
//! This module provides formatters for displaying parsed tasks and
//! validation results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::SiftError;
use crate::nlp::{ParsedTask, TaskVerdict};

pub use json::*;
pub use pretty::*;

/// Format parsed tasks based on output format
///
/// # Errors
///
/// Returns `SiftError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[ParsedTask], format: OutputFormat) -> Result<String, SiftError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format validation verdicts based on output format
///
/// # Errors
///
/// Returns `SiftError::Parse` if JSON serialization fails.
pub fn format_verdicts(verdicts: &[TaskVerdict], format: OutputFormat) -> Result<String, SiftError> {
    match format {
        OutputFormat::Pretty => Ok(format_verdicts_pretty(verdicts)),
        OutputFormat::Json => format_verdicts_json(verdicts),
    }
}
