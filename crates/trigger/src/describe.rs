// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-line summaries of cron expressions for trigger badges

use crate::codec::parse;
use crate::frequency::Frequency;

/// Summarize a cron expression: `"Every day at 00:50"`.
pub fn describe(expr: &str) -> String {
    let d = parse(Some(expr));
    let minute = pad2(d.minute.as_deref().unwrap_or("00"));
    let hour = pad2(d.hour.as_deref().unwrap_or("00"));

    match d.frequency {
        Some(Frequency::Hourly) => format!("Every hour at minute {minute}"),
        Some(Frequency::Daily) => format!("Every day at {hour}:{minute}"),
        Some(Frequency::Weekly) => {
            let weekday = d.weekday.unwrap_or_default();
            match weekday_name(&weekday) {
                Some(name) => format!("Every {name} at {hour}:{minute}"),
                None => format!("Every week on day {weekday} at {hour}:{minute}"),
            }
        }
        Some(Frequency::Monthly) => {
            let monthday = pad2(d.monthday.as_deref().unwrap_or("01"));
            format!("Every month on day {monthday} at {hour}:{minute}")
        }
        Some(Frequency::Custom) | None => format!("Custom schedule: {}", expr.trim()),
    }
}

/// Name of a day-of-week field. `01` is Monday; both `00` and `07` are Sunday.
pub fn weekday_name(value: &str) -> Option<&'static str> {
    let n: u8 = value.parse().ok()?;
    match n {
        1 => Some("Monday"),
        2 => Some("Tuesday"),
        3 => Some("Wednesday"),
        4 => Some("Thursday"),
        5 => Some("Friday"),
        6 => Some("Saturday"),
        0 | 7 => Some("Sunday"),
        _ => None,
    }
}

fn pad2(value: &str) -> String {
    match value.parse::<u8>() {
        Ok(n) => format!("{n:02}"),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
