// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lightning-core: step runs, attempts and their rollup status

pub mod aggregate;
pub mod attempt;
pub mod id;
pub mod status;
pub mod step_run;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use aggregate::{aggregate, AggregateError};
pub use attempt::{Attempt, AttemptError, WorkOrder};
pub use id::{AttemptId, JobId, WorkOrderId};
pub use status::{RunStatus, UnknownStatus};
pub use step_run::{StepRun, StepRunError};
pub use time_fmt::format_duration_ms;
