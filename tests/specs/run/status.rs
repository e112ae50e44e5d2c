//! Attempt status specs
//!
//! The rollup status of an attempt is the status of its last step run.

use crate::prelude::*;

#[test]
fn failed_attempt_text() {
    let temp = Project::empty();
    temp.file("attempt.json", FAILED_ATTEMPT);

    temp.lightning()
        .args(&["status", "attempt.json"])
        .passes()
        .stdout_eq(
            "Attempt:  att-1\n\
             Status:   failure\n\
             Duration: 3s\n\
             \n\
             JOB        STATUS   EXIT  DURATION\n\
             extract    success     0        1s\n\
             transform  success     0        1s\n\
             load       failure     2     500ms\n",
        );
}

#[test]
fn running_attempt_from_toml() {
    let temp = Project::empty();
    temp.file("attempt.toml", RUNNING_ATTEMPT_TOML);

    temp.lightning()
        .args(&["status", "attempt.toml"])
        .passes()
        .stdout_eq(
            "Attempt:  att-2\n\
             Status:   pending\n\
             Duration: -\n\
             \n\
             JOB      STATUS   EXIT  DURATION\n\
             extract  success     0        1s\n\
             load     pending     -         -\n",
        );
}

#[test]
fn failed_attempt_json_from_stdin() {
    let run = cli()
        .args(&["status", "-", "-o", "json"])
        .stdin(FAILED_ATTEMPT)
        .passes();
    let json = run.json();

    assert_eq!(json["id"], "att-1");
    assert_eq!(json["status"], "failure");
    assert_eq!(json["started_at_ms"], 1000);
    assert_eq!(json["finished_at_ms"], 4000);
    assert_eq!(json["duration_ms"], 3000);
    assert_eq!(json["steps"][2]["job_id"], "load");
    assert_eq!(json["steps"][2]["exit_code"], 2);
}

#[test]
fn timed_out_last_step() {
    cli()
        .args(&["status", "-"])
        .stdin(
            r#"{"id": "att-3", "runs": [
                {"job_id": "fetch", "started_at_ms": 0, "finished_at_ms": 30000}
            ]}"#,
        )
        .passes()
        .stdout_has("Status:   timeout\n");
}

#[test]
fn crash_wins_over_exit_code() {
    cli()
        .args(&["status", "-"])
        .stdin(
            r#"{"id": "att-4", "runs": [
                {"job_id": "fetch", "started_at_ms": 0, "finished_at_ms": 10, "exit_code": 0, "crashed": true}
            ]}"#,
        )
        .passes()
        .stdout_has("Status:   crash\n");
}

#[test]
fn earlier_failure_does_not_mask_later_success() {
    cli()
        .args(&["status", "-"])
        .stdin(
            r#"{"id": "att-6", "runs": [
                {"job_id": "lint", "started_at_ms": 0, "finished_at_ms": 10, "exit_code": 1},
                {"job_id": "notify", "started_at_ms": 10, "finished_at_ms": 20, "exit_code": 0}
            ]}"#,
        )
        .passes()
        .stdout_has("Status:   success\n");
}
