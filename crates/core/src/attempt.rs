// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution attempts and the work orders that own them.
//!
//! An `Attempt` is one pass through a workflow: an ordered list of step
//! runs where insertion order is execution order. A `WorkOrder` collects the
//! attempts made for one request; retries append new attempts and the latest
//! one speaks for the whole order.

use crate::aggregate::{aggregate, AggregateError};
use crate::id::{AttemptId, WorkOrderId};
use crate::status::RunStatus;
use crate::step_run::{StepRun, StepRunError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A run inside an attempt violated its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attempt {attempt_id}, run {index}: {source}")]
pub struct AttemptError {
    pub attempt_id: AttemptId,
    pub index: usize,
    #[source]
    pub source: StepRunError,
}

/// One execution pass of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: AttemptId,
    #[serde(default)]
    runs: Vec<StepRun>,
}

impl Attempt {
    pub fn new(id: impl Into<AttemptId>) -> Self {
        Self {
            id: id.into(),
            runs: Vec::new(),
        }
    }

    pub fn with_runs(id: impl Into<AttemptId>, runs: Vec<StepRun>) -> Self {
        Self {
            id: id.into(),
            runs,
        }
    }

    /// Append the next run in execution order.
    pub fn push(&mut self, run: StepRun) {
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[StepRun] {
        &self.runs
    }

    pub fn last_run(&self) -> Option<&StepRun> {
        self.runs.last()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Rollup status; errors when the attempt has no runs.
    pub fn status(&self) -> Result<RunStatus, AggregateError> {
        aggregate(&self.runs)
    }

    /// Check every run's timestamp invariants, reporting the first offender.
    pub fn validate(&self) -> Result<(), AttemptError> {
        for (index, run) in self.runs.iter().enumerate() {
            run.validate().map_err(|source| AttemptError {
                attempt_id: self.id.clone(),
                index,
                source,
            })?;
        }
        Ok(())
    }

    /// When the first run started.
    pub fn started_at_ms(&self) -> Option<u64> {
        self.runs.first().and_then(|run| run.started_at_ms)
    }

    /// When the attempt reached its terminal state, if it has.
    pub fn finished_at_ms(&self) -> Option<u64> {
        match self.status() {
            Ok(status) if status.is_terminal() => self.last_run().and_then(|r| r.finished_at_ms),
            _ => None,
        }
    }

    pub fn duration_ms(&self) -> Option<u64> {
        let start = self.started_at_ms()?;
        let end = self.finished_at_ms()?;
        Some(end.saturating_sub(start))
    }
}

/// A request to execute a workflow, with every attempt made for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

impl WorkOrder {
    pub fn new(id: impl Into<WorkOrderId>) -> Self {
        Self {
            id: id.into(),
            attempts: Vec::new(),
        }
    }

    pub fn latest_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Status of the latest attempt. A work order nobody has attempted yet
    /// is pending.
    pub fn status(&self) -> Result<RunStatus, AggregateError> {
        match self.latest_attempt() {
            Some(attempt) => attempt.status(),
            None => Ok(RunStatus::Pending),
        }
    }

    pub fn validate(&self) -> Result<(), AttemptError> {
        self.attempts.iter().try_for_each(Attempt::validate)
    }
}

#[cfg(test)]
#[path = "attempt_tests.rs"]
mod tests;
