//! Parse command implementation.
//!
//! This module implements `tasksift parse`, which runs the task parser over
//! a file or stdin.

use tracing::debug;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::cli::commands::read_input;
use crate::config::Config;
use crate::error::SiftError;
use crate::nlp::{parse_tasks_with, validate_task, ParsedTask, ParserOptions, Priority};
use crate::output::format_tasks;

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, an option is out of range,
/// or output formatting fails.
pub fn parse(args: ParseArgs, config: &Config, format: OutputFormat) -> Result<String, SiftError> {
    let text = read_input(args.file.as_deref())?;
    let options = resolve_options(&args, config)?;
    let default_priority = args.default_priority.or(config.parser.default_priority);

    let tasks = sift(&text, options, args.validated_only, default_priority);
    format_tasks(&tasks, format)
}

fn resolve_options(args: &ParseArgs, config: &Config) -> Result<ParserOptions, SiftError> {
    let mut options = config.parser.options();

    if let Some(policy) = args.bare_hour {
        options.bare_hour = policy;
    }
    if let Some(limit) = args.max_line_length {
        if limit == 0 {
            return Err(SiftError::Input(
                "--max-line-length must be at least 1".to_string(),
            ));
        }
        options.max_line_length = limit;
    }

    Ok(options)
}

/// Parse, optionally filter to valid tasks, then apply the caller-side
/// priority default.
fn sift(
    text: &str,
    options: ParserOptions,
    validated_only: bool,
    default_priority: Option<Priority>,
) -> Vec<ParsedTask> {
    let mut tasks = parse_tasks_with(text, options);

    if validated_only {
        let before = tasks.len();
        tasks.retain(validate_task);
        debug!(dropped = before - tasks.len(), "dropped invalid tasks");
    }

    match default_priority {
        Some(priority) => tasks
            .into_iter()
            .map(|task| task.with_default_priority(priority))
            .collect(),
        None => tasks,
    }
}
