// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lightning status` - rollup status of one attempt

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use lightning_core::{format_duration_ms, Attempt, AttemptId, JobId, RunStatus};
use serde::Serialize;

use crate::color;
use crate::load::read_record;
use crate::output::{cell, write_json, OutputFormat, Render};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct StatusArgs {
    /// Attempt record (.json or .toml), or `-` to read JSON from stdin
    pub file: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttemptReport<'a> {
    pub id: &'a AttemptId,
    pub status: RunStatus,
    pub started_at_ms: Option<u64>,
    pub finished_at_ms: Option<u64>,
    pub duration_ms: Option<u64>,
    pub steps: Vec<StepReport<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StepReport<'a> {
    pub job_id: &'a JobId,
    pub status: RunStatus,
    pub exit_code: Option<i32>,
    pub duration_ms: Option<u64>,
}

impl<'a> AttemptReport<'a> {
    pub fn new(attempt: &'a Attempt, status: RunStatus) -> Self {
        Self {
            id: &attempt.id,
            status,
            started_at_ms: attempt.started_at_ms(),
            finished_at_ms: attempt.finished_at_ms(),
            duration_ms: attempt.duration_ms(),
            steps: attempt
                .runs()
                .iter()
                .map(|run| StepReport {
                    job_id: &run.job_id,
                    status: run.status(),
                    exit_code: run.exit_code,
                    duration_ms: run.duration_ms(),
                })
                .collect(),
        }
    }
}

pub fn handle(args: StatusArgs, render: Render, out: &mut impl Write) -> Result<()> {
    let attempt: Attempt = read_record(&args.file)?;
    attempt.validate()?;
    let status = attempt
        .status()
        .with_context(|| format!("cannot roll up attempt {}", attempt.id))?;
    tracing::info!(attempt = %attempt.id, %status, runs = attempt.runs().len(), "rolled up attempt");

    show_attempt(&attempt, status, render, out)
}

pub(crate) fn show_attempt(
    attempt: &Attempt,
    status: RunStatus,
    render: Render,
    out: &mut impl Write,
) -> Result<()> {
    match render.format {
        OutputFormat::Json => write_json(out, &AttemptReport::new(attempt, status)),
        OutputFormat::Text => {
            writeln!(out, "Attempt:  {}", attempt.id)?;
            writeln!(
                out,
                "Status:   {}",
                color::status(status.as_str(), render.colorize)
            )?;
            writeln!(
                out,
                "Duration: {}",
                cell(attempt.duration_ms().map(format_duration_ms))
            )?;
            writeln!(out)?;

            let mut table = Table::new(
                vec![
                    Column::left("JOB").with_max(32),
                    Column::status("STATUS"),
                    Column::right("EXIT"),
                    Column::muted("DURATION"),
                ],
                render.colorize,
            );
            for run in attempt.runs() {
                table.row(vec![
                    run.job_id.to_string(),
                    run.status().to_string(),
                    cell(run.exit_code),
                    cell(run.duration_ms().map(format_duration_ms)),
                ]);
            }
            table.render(out)?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
