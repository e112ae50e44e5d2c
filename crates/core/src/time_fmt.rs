// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable run durations.

/// Format a run duration in milliseconds: `"850ms"`, `"12s"`, `"1m5s"`, `"2h3m"`.
///
/// Sub-second durations keep millisecond precision since short steps are
/// common. Past a minute the smaller unit is dropped when it is zero.
pub fn format_duration_ms(ms: u64) -> String {
    if ms < 1_000 {
        return format!("{}ms", ms);
    }
    let secs = ms / 1_000;
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        compound(secs / 60, "m", secs % 60, "s")
    } else {
        compound(secs / 3600, "h", (secs % 3600) / 60, "m")
    }
}

fn compound(major: u64, major_unit: &str, minor: u64, minor_unit: &str) -> String {
    if minor > 0 {
        format!("{}{}{}{}", major, major_unit, minor, minor_unit)
    } else {
        format!("{}{}", major, major_unit)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
