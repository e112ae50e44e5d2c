//! Cron expression specs
//!
//! Trigger forms edit schedules as a frequency plus two-digit fields.

use crate::prelude::*;

#[test]
fn parse_weekly() {
    cli()
        .args(&["cron", "parse", "05 00 * * 06"])
        .passes()
        .stdout_eq("frequency: weekly\nminute: 05\nhour: 00\nweekday: 06\n");
}

#[test]
fn parse_unrecognized_is_custom() {
    cli()
        .args(&["cron", "parse", "0 0 1 1 *"])
        .passes()
        .stdout_eq("frequency: custom\n");
}

#[test]
fn parse_json() {
    let run = cli()
        .args(&["cron", "parse", "05 00 08 * *", "-o", "json"])
        .passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "frequency": "monthly",
            "minute": "05",
            "hour": "00",
            "monthday": "08"
        })
    );
}

#[test]
fn build_daily() {
    cli()
        .args(&["cron", "build", "-f", "daily", "--minute", "50", "--hour", "00"])
        .passes()
        .stdout_eq("50 00 * * *\n");
}

#[test]
fn build_weekly_defaults_to_monday_midnight() {
    cli()
        .args(&["cron", "build", "--frequency", "weekly"])
        .passes()
        .stdout_eq("00 00 * * 01\n");
}

#[test]
fn build_hourly_ignores_hour() {
    cli()
        .args(&["cron", "build", "-f", "hourly", "--minute", "15", "--hour", "09"])
        .passes()
        .stdout_eq("15 * * * *\n");
}

#[test]
fn build_custom_returns_previous() {
    cli()
        .args(&["cron", "build", "-f", "custom", "--previous", "*/5 * * * *"])
        .passes()
        .stdout_eq("*/5 * * * *\n");
}

#[test]
fn build_without_frequency_returns_default() {
    cli()
        .args(&["cron", "build"])
        .passes()
        .stdout_eq("0 0 * * *\n");
}

#[test]
fn build_json() {
    let run = cli()
        .args(&["cron", "build", "-f", "monthly", "--monthday", "15", "-o", "json"])
        .passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "expression": "00 00 15 * *",
            "description": "Every month on day 15 at 00:00"
        })
    );
}

#[test]
fn describe_custom() {
    cli()
        .args(&["cron", "describe", "*/15 * * * *"])
        .passes()
        .stdout_eq("Custom schedule: */15 * * * *\n");
}

#[test]
fn parse_then_build_round_trips() {
    let parsed = cli()
        .args(&["cron", "parse", "30 18 * * 06", "-o", "json"])
        .passes()
        .json();

    cli()
        .args(&[
            "cron",
            "build",
            "-f",
            parsed["frequency"].as_str().unwrap(),
            "--minute",
            parsed["minute"].as_str().unwrap(),
            "--hour",
            parsed["hour"].as_str().unwrap(),
            "--weekday",
            parsed["weekday"].as_str().unwrap(),
        ])
        .passes()
        .stdout_eq("30 18 * * 06\n");
}
