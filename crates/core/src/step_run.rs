// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record of one step's execution within an attempt.

use crate::id::JobId;
use crate::status::RunStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp invariants violated by a [`StepRun`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepRunError {
    #[error("run of {job_id} finished without having started")]
    FinishedWithoutStart { job_id: JobId },

    #[error("run of {job_id} finished at {finished_at_ms} before it started at {started_at_ms}")]
    FinishedBeforeStart {
        job_id: JobId,
        started_at_ms: u64,
        finished_at_ms: u64,
    },
}

/// One step's execution record. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRun {
    pub job_id: JobId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at_ms: Option<u64>,
    /// `0` for success, nonzero for failure. Absent on a finished run means
    /// the process never reported back (timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Set by the execution supervisor when the run died from an unhandled
    /// fault rather than exiting.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub crashed: bool,
}

impl StepRun {
    /// A run that has been scheduled but not started.
    pub fn new(job_id: impl Into<JobId>) -> Self {
        Self {
            job_id: job_id.into(),
            started_at_ms: None,
            finished_at_ms: None,
            exit_code: None,
            crashed: false,
        }
    }

    pub fn started(mut self, at_ms: u64) -> Self {
        self.started_at_ms = Some(at_ms);
        self
    }

    /// Mark the run finished with the exit code it reported.
    pub fn exited(mut self, at_ms: u64, exit_code: i32) -> Self {
        self.finished_at_ms = Some(at_ms);
        self.exit_code = Some(exit_code);
        self
    }

    /// Mark the run finished without an exit code.
    pub fn timed_out(mut self, at_ms: u64) -> Self {
        self.finished_at_ms = Some(at_ms);
        self.exit_code = None;
        self
    }

    /// Mark the run finished through an unhandled fault.
    pub fn crashed_at(mut self, at_ms: u64) -> Self {
        self.finished_at_ms = Some(at_ms);
        self.crashed = true;
        self
    }

    pub fn is_started(&self) -> bool {
        self.started_at_ms.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at_ms.is_some()
    }

    /// Started and not yet finished.
    pub fn is_running(&self) -> bool {
        self.is_started() && !self.is_finished()
    }

    /// Status of this run on its own.
    ///
    /// The crash flag is only consulted once the run has finished, and it
    /// outranks whatever exit code was recorded.
    pub fn status(&self) -> RunStatus {
        if !self.is_finished() {
            return RunStatus::Pending;
        }
        if self.crashed {
            return RunStatus::Crash;
        }
        match self.exit_code {
            None => RunStatus::Timeout,
            Some(0) => RunStatus::Success,
            Some(_) => RunStatus::Failure,
        }
    }

    /// Wall-clock duration, when both timestamps are known.
    pub fn duration_ms(&self) -> Option<u64> {
        match (self.started_at_ms, self.finished_at_ms) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }

    /// Check the timestamp invariants.
    pub fn validate(&self) -> Result<(), StepRunError> {
        match (self.started_at_ms, self.finished_at_ms) {
            (None, Some(_)) => Err(StepRunError::FinishedWithoutStart {
                job_id: self.job_id.clone(),
            }),
            (Some(started_at_ms), Some(finished_at_ms)) if finished_at_ms < started_at_ms => {
                Err(StepRunError::FinishedBeforeStart {
                    job_id: self.job_id.clone(),
                    started_at_ms,
                    finished_at_ms,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "step_run_tests.rs"]
mod tests;
