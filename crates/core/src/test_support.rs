// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Attempt, StepRun};

// ── Step run factory functions ──────────────────────────────────────────────

pub fn running_run(job_id: &str, started_at_ms: u64) -> StepRun {
    StepRun::new(job_id).started(started_at_ms)
}

pub fn succeeded_run(job_id: &str, started_at_ms: u64, finished_at_ms: u64) -> StepRun {
    StepRun::new(job_id)
        .started(started_at_ms)
        .exited(finished_at_ms, 0)
}

pub fn failed_run(job_id: &str, started_at_ms: u64, finished_at_ms: u64, code: i32) -> StepRun {
    StepRun::new(job_id)
        .started(started_at_ms)
        .exited(finished_at_ms, code)
}

pub fn timed_out_run(job_id: &str, started_at_ms: u64, finished_at_ms: u64) -> StepRun {
    StepRun::new(job_id)
        .started(started_at_ms)
        .timed_out(finished_at_ms)
}

pub fn crashed_run(job_id: &str, started_at_ms: u64, finished_at_ms: u64) -> StepRun {
    StepRun::new(job_id)
        .started(started_at_ms)
        .crashed_at(finished_at_ms)
}

// ── Attempt fixtures ────────────────────────────────────────────────────────

/// Three-step extract/transform/load attempt whose last step ends with `last`.
pub fn etl_attempt(id: &str, last: StepRun) -> Attempt {
    Attempt::with_runs(
        id,
        vec![
            succeeded_run("extract", 1_000, 2_000),
            succeeded_run("transform", 2_000, 3_500),
            last,
        ],
    )
}
