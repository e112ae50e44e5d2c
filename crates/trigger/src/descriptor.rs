// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured, form-editable view of a cron expression

use crate::frequency::Frequency;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The trigger form's view of a cron expression.
///
/// Field values are kept as the zero-padded strings the form works with
/// (`"05"`, `"23"`), not as integers, so a parse/build cycle reproduces the
/// expression text exactly. Only the fields relevant to `frequency` are set
/// by [`crate::parse`]; [`crate::build`] ignores the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
    /// `"01"` (Monday) through `"07"` (Sunday)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    /// `"01"` through `"31"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthday: Option<String>,
}

impl CronDescriptor {
    pub fn hourly(minute: impl Into<String>) -> Self {
        Self {
            frequency: Some(Frequency::Hourly),
            minute: Some(minute.into()),
            ..Self::default()
        }
    }

    pub fn daily(minute: impl Into<String>, hour: impl Into<String>) -> Self {
        Self {
            frequency: Some(Frequency::Daily),
            minute: Some(minute.into()),
            hour: Some(hour.into()),
            ..Self::default()
        }
    }

    pub fn weekly(
        minute: impl Into<String>,
        hour: impl Into<String>,
        weekday: impl Into<String>,
    ) -> Self {
        Self {
            frequency: Some(Frequency::Weekly),
            minute: Some(minute.into()),
            hour: Some(hour.into()),
            weekday: Some(weekday.into()),
            ..Self::default()
        }
    }

    pub fn monthly(
        minute: impl Into<String>,
        hour: impl Into<String>,
        monthday: impl Into<String>,
    ) -> Self {
        Self {
            frequency: Some(Frequency::Monthly),
            minute: Some(minute.into()),
            hour: Some(hour.into()),
            monthday: Some(monthday.into()),
            ..Self::default()
        }
    }

    pub fn custom() -> Self {
        Self {
            frequency: Some(Frequency::Custom),
            ..Self::default()
        }
    }

    /// No field populated, as produced by parsing an absent expression.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Reasons a submitted descriptor cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("{frequency} schedule requires a {field}")]
    MissingField {
        frequency: Frequency,
        field: &'static str,
    },

    #[error("{field} must be two digits, got {value:?}")]
    NotTwoDigits { field: &'static str, value: String },

    #[error("{field} must be between {min:02} and {max:02}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: u8,
        max: u8,
    },
}

/// Check a submitted descriptor before it is turned into an expression.
///
/// Custom and empty descriptors are always accepted; they carry no fields to
/// check. Irrelevant fields are not inspected.
pub fn validate(descriptor: &CronDescriptor) -> Result<(), DescriptorError> {
    let Some(frequency) = descriptor.frequency else {
        return Ok(());
    };

    let mut checks: Vec<(&'static str, &Option<String>, u8, u8)> = Vec::new();
    if frequency.uses_minute() {
        checks.push(("minute", &descriptor.minute, 0, 59));
    }
    if frequency.uses_hour() {
        checks.push(("hour", &descriptor.hour, 0, 23));
    }
    match frequency {
        Frequency::Weekly => checks.push(("weekday", &descriptor.weekday, 1, 7)),
        Frequency::Monthly => checks.push(("monthday", &descriptor.monthday, 1, 31)),
        _ => {}
    }

    for (field, value, min, max) in checks {
        let value = value
            .as_deref()
            .ok_or(DescriptorError::MissingField { frequency, field })?;
        check_field(field, value, min, max)?;
    }
    Ok(())
}

fn check_field(field: &'static str, value: &str, min: u8, max: u8) -> Result<(), DescriptorError> {
    if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DescriptorError::NotTwoDigits {
            field,
            value: value.to_string(),
        });
    }
    let n: u8 = value.parse().map_err(|_| DescriptorError::NotTwoDigits {
        field,
        value: value.to_string(),
    })?;
    if n < min || n > max {
        return Err(DescriptorError::OutOfRange {
            field,
            value: value.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
