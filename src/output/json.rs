//! JSON output formatting for tasksift.

use serde_json::json;

use crate::error::SiftError;
use crate::nlp::{ParsedTask, TaskVerdict};

/// Format parsed tasks as JSON
///
/// # Errors
///
/// Returns `SiftError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[ParsedTask]) -> Result<String, SiftError> {
    let output = json!({
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format validation verdicts as JSON
///
/// # Errors
///
/// Returns `SiftError::Parse` if JSON serialization fails.
pub fn format_verdicts_json(verdicts: &[TaskVerdict]) -> Result<String, SiftError> {
    let valid = verdicts.iter().filter(|v| v.valid).count();
    let output = json!({
        "count": verdicts.len(),
        "valid": valid,
        "invalid": verdicts.len() - valid,
        "items": verdicts
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Priority;

    fn make_task(title: &str) -> ParsedTask {
        ParsedTask {
            title: title.to_string(),
            start_time: Some("10:00".to_string()),
            end_time: Some("12:00".to_string()),
            estimated_duration: Some(120),
            priority: Some(Priority::High),
        }
    }

    #[test]
    fn test_format_tasks_json() {
        let tasks = vec![make_task("Work on feature"), ParsedTask::titled("Go to the gym")];

        let json = format_tasks_json(&tasks).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["items"][0]["title"], "Work on feature");
        assert_eq!(parsed["items"][0]["startTime"], "10:00");
        assert_eq!(parsed["items"][0]["priority"], "high");
        assert!(parsed["items"][1].get("startTime").is_none());
    }

    #[test]
    fn test_format_empty_tasks_json() {
        let json = format_tasks_json(&[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 0);
        assert!(parsed["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_verdicts_json() {
        let verdicts = vec![
            TaskVerdict::assess(make_task("Work on feature")),
            TaskVerdict::assess(ParsedTask::titled("ab")),
        ];

        let json = format_verdicts_json(&verdicts).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["valid"], 1);
        assert_eq!(parsed["invalid"], 1);
        assert_eq!(parsed["items"][0]["valid"], true);
        assert!(parsed["items"][0].get("reason").is_none());
        assert_eq!(parsed["items"][1]["task"]["title"], "ab");
        assert!(parsed["items"][1]["reason"].as_str().unwrap().contains("too short"));
    }
}
