// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rollup of an attempt's step runs into one status.

use crate::status::RunStatus;
use crate::step_run::StepRun;
use thiserror::Error;

/// Errors from [`aggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Compute the overall status of an attempt from its runs, in execution order.
///
/// Steps form a linear chain and a failing step halts everything after it,
/// so the last run alone carries the attempt's terminal state. Earlier runs
/// are never consulted.
///
/// Fails only on an empty slice; callers are expected to aggregate attempts
/// that have begun.
pub fn aggregate(runs: &[StepRun]) -> Result<RunStatus, AggregateError> {
    let last = runs
        .last()
        .ok_or(AggregateError::InvalidInput("attempt has no runs"))?;
    Ok(last.status())
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
