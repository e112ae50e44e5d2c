// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Cron trigger expressions and the frequency selections they map to

mod codec;
mod describe;
mod descriptor;
mod frequency;

pub use codec::{build, parse};
pub use describe::{describe, weekday_name};
pub use descriptor::{validate, CronDescriptor, DescriptorError};
pub use frequency::{Frequency, UnknownFrequency};

/// Expression given to newly created cron triggers: daily at midnight.
pub const DEFAULT_CRON_EXPRESSION: &str = "0 0 * * *";
