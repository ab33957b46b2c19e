use colored::Colorize;

use crate::nlp::{ParsedTask, Priority, TaskVerdict};

/// Format a list of parsed tasks as a pretty list
pub fn format_tasks_pretty(tasks: &[ParsedTask]) -> String {
    if tasks.is_empty() {
        return "Tasks (0 items)\n  No tasks found".to_string();
    }

    let mut output = format!("Tasks ({} items)\n", tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&format_task_line(task));
        output.push('\n');
    }

    output
}

/// Format validation verdicts as a pretty list
pub fn format_verdicts_pretty(verdicts: &[TaskVerdict]) -> String {
    let valid = verdicts.iter().filter(|v| v.valid).count();
    let mut output = format!(
        "Validation ({} of {} valid)\n",
        valid,
        verdicts.len()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for verdict in verdicts {
        let mark = if verdict.valid {
            "[ok]".green()
        } else {
            "[!!]".red()
        };
        output.push_str(&format!("{} {}", mark, format_task_line(&verdict.task)));
        if let Some(reason) = &verdict.reason {
            output.push_str(&format!("\n     {}", reason.red()));
        }
        output.push('\n');
    }

    output
}

fn format_task_line(task: &ParsedTask) -> String {
    let mut line = format!("• {}", task.title.bold());

    // Add schedule if present
    match (&task.start_time, &task.end_time) {
        (Some(start), Some(end)) => line.push_str(&format!("  {}", format!("{start}–{end}").yellow())),
        (Some(start), None) => line.push_str(&format!("  {}", start.yellow())),
        _ => {},
    }

    // Add duration if present
    if let Some(minutes) = task.estimated_duration {
        line.push_str(&format!("  {}", format_minutes(minutes).dimmed()));
    }

    // Add priority if present
    if let Some(priority) = task.priority {
        let label = format!("!{priority}");
        let label = match priority {
            Priority::High => label.red(),
            Priority::Medium => label.yellow(),
            Priority::Low => label.cyan(),
        };
        line.push_str(&format!("  {label}"));
    }

    line
}

/// "90" -> "1h 30m", "45" -> "45m", "120" -> "2h".
fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
