//! Task list parser.
//!
//! Turns free-text planning output such as
//!
//! ```text
//! Here's your plan for today:
//! • Standup at 9:30am
//! • Work on feature for 2 hours at 10am
//! • Fix critical bug (high priority)
//! ```
//!
//! into structured [`ParsedTask`] records.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{end_time, format_hhmm, BareHourPolicy};
use crate::nlp::classifier::classify_lines;
use crate::nlp::extractor::{extract_fields, ExtractedFields};

/// Lines longer than this are treated as explanatory prose.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 200;

/// Priority levels for tasks.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// "(low priority)"
    Low,
    /// "(medium priority)"
    Medium,
    /// "(high priority)"
    High,
}

impl Priority {
    /// Read a priority level word, ignoring case.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// A task recovered from one line of planning text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    /// Task title with time, duration and priority phrases removed.
    pub title: String,
    /// Start time as `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End time as `HH:MM`; only set together with a start time and duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    /// Explicit priority, if the line stated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ParsedTask {
    /// Create a task with only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Fill in a priority when the line didn't state one.
    ///
    /// The parser never invents a priority; callers that want one (for
    /// example "medium" for everything unmarked) apply it here.
    #[must_use]
    pub fn with_default_priority(mut self, default: Priority) -> Self {
        self.priority.get_or_insert(default);
        self
    }
}

impl From<ExtractedFields> for ParsedTask {
    fn from(fields: ExtractedFields) -> Self {
        let end = match (fields.start_time, fields.duration_minutes) {
            (Some(start), Some(minutes)) => Some(format_hhmm(end_time(start, minutes))),
            _ => None,
        };

        Self {
            title: fields.title,
            start_time: fields.start_time.map(format_hhmm),
            end_time: end,
            estimated_duration: fields.duration_minutes,
            priority: fields.priority,
        }
    }
}

/// Knobs for the line classifier and time normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Lines longer than this many characters are skipped as prose.
    pub max_line_length: usize,
    /// How hours without am/pm are read.
    pub bare_hour: BareHourPolicy,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            bare_hour: BareHourPolicy::default(),
        }
    }
}

/// Parse an AI planning response into tasks using the default options.
///
/// # Examples
///
/// ```
/// use tasksift::nlp::{parse_tasks_from_ai_response, Priority};
///
/// let tasks = parse_tasks_from_ai_response(
///     "• Work on feature for 2 hours at 10am\n• Fix critical bug (high priority)",
/// );
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks[0].title, "Work on feature");
/// assert_eq!(tasks[0].start_time.as_deref(), Some("10:00"));
/// assert_eq!(tasks[0].end_time.as_deref(), Some("12:00"));
/// assert_eq!(tasks[1].priority, Some(Priority::High));
/// ```
#[must_use]
pub fn parse_tasks_from_ai_response(response_text: &str) -> Vec<ParsedTask> {
    parse_tasks_with(response_text, ParserOptions::default())
}

/// Parse planning text into tasks with explicit options.
///
/// Never fails: lines that don't look like tasks are skipped, and fields
/// that can't be read are left empty.
#[must_use]
pub fn parse_tasks_with(text: &str, options: ParserOptions) -> Vec<ParsedTask> {
    let tasks: Vec<ParsedTask> = classify_lines(text, options)
        .filter_map(|candidate| {
            let fields = extract_fields(candidate.body, options.bare_hour);
            if fields.title.is_empty() {
                debug!(line = candidate.raw, "dropping candidate with empty title");
                return None;
            }
            Some(ParsedTask::from(fields))
        })
        .collect();

    debug!(count = tasks.len(), "parsed tasks");
    tasks
}
