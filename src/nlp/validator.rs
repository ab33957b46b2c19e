//! Task validation.
//!
//! Decides whether a parsed task is good enough to offer to the user or
//! store. Rejection is an ordinary outcome, reported through the return
//! value.

use serde::Serialize;
use thiserror::Error;

use crate::core::is_canonical_hhmm;
use crate::nlp::parser::ParsedTask;

/// Shortest accepted title, in characters.
pub const MIN_TITLE_LEN: usize = 3;
/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Why a task failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskRejection {
    #[error("title is too short ({0} characters, minimum {min})", min = MIN_TITLE_LEN)]
    TitleTooShort(usize),

    #[error("title is too long ({0} characters, maximum {max})", max = MAX_TITLE_LEN)]
    TitleTooLong(usize),

    #[error("start time {0:?} is not a 24-hour HH:MM time")]
    InvalidStartTime(String),

    #[error("end time {0:?} is not a 24-hour HH:MM time")]
    InvalidEndTime(String),
}

/// Check a task, returning the first problem found.
///
/// # Errors
///
/// Returns a [`TaskRejection`] describing the first failed rule.
pub fn check_task(task: &ParsedTask) -> Result<(), TaskRejection> {
    let length = task.title.trim().chars().count();
    if length < MIN_TITLE_LEN {
        return Err(TaskRejection::TitleTooShort(length));
    }
    if length > MAX_TITLE_LEN {
        return Err(TaskRejection::TitleTooLong(length));
    }

    if let Some(start) = task.start_time.as_deref() {
        if !is_canonical_hhmm(start) {
            return Err(TaskRejection::InvalidStartTime(start.to_string()));
        }
    }
    if let Some(end) = task.end_time.as_deref() {
        if !is_canonical_hhmm(end) {
            return Err(TaskRejection::InvalidEndTime(end.to_string()));
        }
    }

    Ok(())
}

/// Check whether a task is acceptable.
///
/// # Examples
///
/// ```
/// use tasksift::nlp::{validate_task, ParsedTask};
///
/// assert!(!validate_task(&ParsedTask::titled("ab")));
///
/// let mut task = ParsedTask::titled("Task");
/// task.start_time = Some("14:30".to_string());
/// task.end_time = Some("15:00".to_string());
/// assert!(validate_task(&task));
/// ```
#[must_use]
pub fn validate_task(task: &ParsedTask) -> bool {
    check_task(task).is_ok()
}

/// A task together with its validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskVerdict {
    /// The task that was checked.
    pub task: ParsedTask,
    /// Whether it passed.
    pub valid: bool,
    /// Why it failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TaskVerdict {
    /// Validate a task and record the outcome.
    #[must_use]
    pub fn assess(task: ParsedTask) -> Self {
        let reason = check_task(&task).err().map(|e| e.to_string());
        Self {
            task,
            valid: reason.is_none(),
            reason,
        }
    }
}
