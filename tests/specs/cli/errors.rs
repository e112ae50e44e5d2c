//! CLI error handling specs
//!
//! Verify error messages and exit codes for bad input.

use crate::prelude::*;

#[test]
fn unknown_command_is_a_usage_error() {
    cli()
        .args(&["deploy"])
        .fails()
        .code(2)
        .stderr_has("unrecognized subcommand");
}

#[test]
fn status_without_file_is_a_usage_error() {
    cli().args(&["status"]).fails().code(2);
}

#[test]
fn unknown_frequency_is_a_usage_error() {
    cli()
        .args(&["cron", "build", "--frequency", "yearly"])
        .fails()
        .code(2)
        .stderr_has("unknown frequency: yearly");
}

#[test]
fn missing_record_file_fails() {
    let temp = Project::empty();
    temp.lightning()
        .args(&["status", "missing.json"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to read missing.json");
}

#[test]
fn malformed_json_on_stdin_fails() {
    cli()
        .args(&["status", "-"])
        .stdin("{ not json")
        .fails()
        .code(1)
        .stderr_has("Error: invalid JSON in stdin");
}

#[test]
fn attempt_without_runs_reports_cause() {
    cli()
        .args(&["status", "-"])
        .stdin(r#"{"id": "att-0"}"#)
        .fails()
        .code(1)
        .stderr_eq(
            "Error: cannot roll up attempt att-0\n\
             \n\
             Caused by:\n    \
             0: invalid input: attempt has no runs\n",
        );
}

#[test]
fn run_finished_before_start_is_rejected() {
    cli()
        .args(&["status", "-"])
        .stdin(
            r#"{"id": "att-5", "runs": [
                {"job_id": "load", "started_at_ms": 9000, "finished_at_ms": 100, "exit_code": 0}
            ]}"#,
        )
        .fails()
        .stderr_has("run of load finished at 100 before it started at 9000");
}

#[test]
fn cron_build_validate_rejects_bad_field() {
    cli()
        .args(&[
            "cron",
            "build",
            "--frequency",
            "daily",
            "--minute",
            "00",
            "--hour",
            "24",
            "--validate",
        ])
        .fails()
        .code(1)
        .stderr_has("invalid schedule")
        .stderr_has("hour must be between 00 and 23, got 24");
}

#[test]
fn cron_build_validate_requires_used_fields() {
    cli()
        .args(&[
            "cron",
            "build",
            "--frequency",
            "weekly",
            "--minute",
            "05",
            "--hour",
            "00",
            "--validate",
        ])
        .fails()
        .code(1)
        .stderr_eq(
            "Error: invalid schedule\n\
             \n\
             Caused by:\n    \
             0: weekly schedule requires a weekday\n",
        );
}
