//! Validate command implementation.

use serde::Deserialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::cli::commands::read_input;
use crate::error::SiftError;
use crate::nlp::{ParsedTask, TaskVerdict};
use crate::output::format_verdicts;

/// Accepted JSON shapes: an array, `tasksift parse -o json` output, or one task.
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskInput {
    Many(Vec<ParsedTask>),
    Listing { items: Vec<ParsedTask> },
    One(ParsedTask),
}

impl TaskInput {
    fn into_tasks(self) -> Vec<ParsedTask> {
        match self {
            Self::Many(tasks) | Self::Listing { items: tasks } => tasks,
            Self::One(task) => vec![task],
        }
    }
}

/// Formatted verdicts plus whether every task passed.
#[derive(Debug)]
pub struct ValidationReport {
    /// Rendered verdicts.
    pub output: String,
    /// True when no task was rejected.
    pub all_valid: bool,
}

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or isn't task JSON.
pub fn validate(args: ValidateArgs, format: OutputFormat) -> Result<ValidationReport, SiftError> {
    let text = read_input(args.file.as_deref())?;
    let verdicts = assess_json(&text)?;

    Ok(ValidationReport {
        all_valid: verdicts.iter().all(|v| v.valid),
        output: format_verdicts(&verdicts, format)?,
    })
}

fn assess_json(text: &str) -> Result<Vec<TaskVerdict>, SiftError> {
    if text.trim().is_empty() {
        return Err(SiftError::Input("no tasks provided".to_string()));
    }

    let input: TaskInput = serde_json::from_str(text)?;
    Ok(input
        .into_tasks()
        .into_iter()
        .map(TaskVerdict::assess)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_single_task() {
        let verdicts = assess_json(r#"{"title": "ab"}"#).unwrap();
        assert_eq!(verdicts.len(), 1);
        assert!(!verdicts[0].valid);
    }

    #[test]
    fn test_assess_array() {
        let verdicts = assess_json(
            r#"[{"title": "Task", "startTime": "14:30", "endTime": "15:00"},
                {"title": "Bad time", "startTime": "2pm"}]"#,
        )
        .unwrap();
        let valid: Vec<bool> = verdicts.iter().map(|v| v.valid).collect();
        assert_eq!(valid, vec![true, false]);
    }

    #[test]
    fn test_assess_parse_output() {
        let listing = r#"{"count": 1, "items": [{"title": "Meeting", "startTime": "10:00"}]}"#;
        let verdicts = assess_json(listing).unwrap();
        assert_eq!(verdicts.len(), 1);
        assert!(verdicts[0].valid);
    }

    #[test]
    fn test_assess_rejects_garbage() {
        assert!(matches!(assess_json("   "), Err(SiftError::Input(_))));
        assert!(matches!(assess_json("not json"), Err(SiftError::Parse(_))));
        assert!(matches!(assess_json(r#"{"name": "x"}"#), Err(SiftError::Parse(_))));
    }
}
