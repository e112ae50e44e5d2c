// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-way mapping between cron expressions and [`CronDescriptor`]s.
//!
//! Expressions use the five-field form `minute hour day-of-month month
//! day-of-week`. Only four shapes map to a structured frequency; everything
//! else is `custom` and is carried through untouched by [`build`].

use crate::descriptor::CronDescriptor;
use crate::frequency::Frequency;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static PATTERNS: LazyLock<[(Frequency, Regex); 4]> = LazyLock::new(|| {
    let re = |pattern: &str| Regex::new(pattern).expect("constant regex pattern is valid");
    [
        (Frequency::Hourly, re(r"^(?P<minute>[0-9]{1,2}) \* \* \* \*$")),
        (
            Frequency::Daily,
            re(r"^(?P<minute>[0-9]{1,2}) (?P<hour>[0-9]{1,2}) \* \* \*$"),
        ),
        (
            Frequency::Weekly,
            re(r"^(?P<minute>[0-9]{1,2}) (?P<hour>[0-9]{1,2}) \* \* (?P<weekday>[0-9]{1,2})$"),
        ),
        (
            Frequency::Monthly,
            re(r"^(?P<minute>[0-9]{1,2}) (?P<hour>[0-9]{1,2}) (?P<monthday>[0-9]{1,2}) \* \*$"),
        ),
    ]
});

const DEFAULT_MINUTE: &str = "00";
const DEFAULT_HOUR: &str = "00";
const DEFAULT_WEEKDAY: &str = "01";
const DEFAULT_MONTHDAY: &str = "01";

/// Read a cron expression into the form's frequency selection.
///
/// The first matching shape wins: hourly, daily, weekly, then monthly.
/// Numeric fields are captured verbatim. Unrecognized expressions become
/// `custom` with no other fields, and an absent expression yields an empty
/// descriptor. Never fails.
pub fn parse(expr: Option<&str>) -> CronDescriptor {
    let Some(expr) = expr else {
        return CronDescriptor::default();
    };
    let trimmed = expr.trim();

    for (frequency, pattern) in PATTERNS.iter() {
        if let Some(caps) = pattern.captures(trimmed) {
            return CronDescriptor {
                frequency: Some(*frequency),
                minute: capture(&caps, "minute"),
                hour: capture(&caps, "hour"),
                weekday: capture(&caps, "weekday"),
                monthday: capture(&caps, "monthday"),
            };
        }
    }

    tracing::debug!(expression = %expr, "unrecognized cron pattern, treating as custom");
    CronDescriptor::custom()
}

fn capture(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_string())
}

/// Turn a submitted frequency selection back into a cron expression.
///
/// `previous` is returned unchanged for `custom` (and for a descriptor with
/// no frequency) since the form never synthesizes custom expressions.
/// Fields that the frequency does not use are written as wildcards whatever
/// the descriptor holds; a missing field that it does use takes the form's
/// default. Never fails.
pub fn build(previous: &str, descriptor: &CronDescriptor) -> String {
    let Some(frequency) = descriptor.frequency else {
        return previous.to_string();
    };

    let minute = field_or(&descriptor.minute, DEFAULT_MINUTE);
    let hour = field_or(&descriptor.hour, DEFAULT_HOUR);

    match frequency {
        Frequency::Hourly => format!("{minute} * * * *"),
        Frequency::Daily => format!("{minute} {hour} * * *"),
        Frequency::Weekly => {
            let weekday = field_or(&descriptor.weekday, DEFAULT_WEEKDAY);
            format!("{minute} {hour} * * {weekday}")
        }
        Frequency::Monthly => {
            let monthday = field_or(&descriptor.monthday, DEFAULT_MONTHDAY);
            format!("{minute} {hour} {monthday} * *")
        }
        Frequency::Custom => previous.to_string(),
    }
}

fn field_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
