//! End-to-end tests for the tasksift binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PLAN: &str = "Here's your schedule for today:

• Meeting at 10am
• Work on feature for 2 hours at 10am
• Fix critical bug (high priority)

Let me know if you'd like any changes!
";

/// A command isolated from the user's real config.
fn tasksift(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tasksift").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("TASKSIFT_CONFIG")
        .env_remove("TASKSIFT_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============
// parse command
// =============

#[test]
fn test_parse_stdin_json() {
    let home = TempDir::new().unwrap();
    let output = tasksift(&home)
        .args(["parse", "-o", "json"])
        .write_stdin(PLAN)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["count"], 3);
    assert_eq!(json["items"][0]["title"], "Meeting");
    assert_eq!(json["items"][0]["startTime"], "10:00");
    assert_eq!(json["items"][1]["endTime"], "12:00");
    assert_eq!(json["items"][1]["estimatedDuration"], 120);
    assert_eq!(json["items"][2]["priority"], "high");
}

#[test]
fn test_parse_file_pretty() {
    let home = TempDir::new().unwrap();
    let plan = home.path().join("plan.txt");
    std::fs::write(&plan, PLAN).unwrap();

    tasksift(&home)
        .arg("parse")
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks (3 items)"))
        .stdout(predicate::str::contains("Fix critical bug"))
        .stdout(predicate::str::contains("schedule for today").not());
}

#[test]
fn test_parse_prose_only_is_empty() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .args(["parse", "-o", "json"])
        .write_stdin("I can help you plan your day! What would you like to focus on?")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_parse_default_priority_and_validated_only() {
    let home = TempDir::new().unwrap();
    let output = tasksift(&home)
        .args(["parse", "-o", "json", "--validated-only", "--default-priority", "medium"])
        .write_stdin("• Go\n• Write report")
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["count"], 1);
    assert_eq!(json["items"][0]["title"], "Write report");
    assert_eq!(json["items"][0]["priority"], "medium");
}

#[test]
fn test_parse_rejects_zero_line_length() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .args(["parse", "--max-line-length", "0"])
        .write_stdin(PLAN)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max-line-length"));
}

#[test]
fn test_parse_missing_file_fails() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_parse_uses_config_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");
    std::fs::write(
        &config,
        "general:\n  default_output: json\nparser:\n  bare_hour: twenty-four-hour\n",
    )
    .unwrap();

    let output = tasksift(&home)
        .arg("parse")
        .arg("--config")
        .arg(&config)
        .write_stdin("• Call Sam at 3")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["items"][0]["startTime"], "03:00");
}

// ================
// validate command
// ================

#[test]
fn test_validate_accepts_parse_output() {
    let home = TempDir::new().unwrap();
    let parsed = tasksift(&home)
        .args(["parse", "-o", "json"])
        .write_stdin(PLAN)
        .output()
        .unwrap();

    tasksift(&home)
        .args(["validate", "-o", "json"])
        .write_stdin(parsed.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"invalid\": 0"));
}

#[test]
fn test_validate_failure_exit_code() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .arg("validate")
        .write_stdin(r#"{"title": "ab"}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation (0 of 1 valid)"));
}

#[test]
fn test_validate_bad_json() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .arg("validate")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

// ==============
// config command
// ==============

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_line_length: 200"))
        .stdout(predicate::str::contains("default_output: pretty"));
}

#[test]
fn test_config_init_and_path() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join(".tasksift").join("config.yaml").is_file());

    tasksift(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    tasksift(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".tasksift"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.yaml");
    std::fs::write(&config, "parser:\n  max_line_length: 0\n").unwrap();

    tasksift(&home)
        .args(["config", "show"])
        .env("TASKSIFT_CONFIG", &config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// ===================
// completions command
// ===================

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tasksift"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    tasksift(&home)
        .args(["parse", "-v"])
        .write_stdin(PLAN)
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed tasks"));
}
