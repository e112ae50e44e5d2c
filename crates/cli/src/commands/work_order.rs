// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lightning work-order` - status of a work order across its attempts

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use lightning_core::{format_duration_ms, AttemptId, RunStatus, WorkOrder, WorkOrderId};
use serde::Serialize;

use super::status::AttemptReport;
use crate::color;
use crate::load::read_record;
use crate::output::{cell, write_json, OutputFormat, Render};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct WorkOrderArgs {
    /// Work order record (.json or .toml), or `-` to read JSON from stdin
    pub file: String,
}

#[derive(Debug, Serialize)]
struct WorkOrderReport<'a> {
    id: &'a WorkOrderId,
    status: RunStatus,
    attempts: Vec<AttemptSummary<'a>>,
}

/// Attempts that are still empty carry no status of their own.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum AttemptSummary<'a> {
    Rolled(AttemptReport<'a>),
    Empty { id: &'a AttemptId },
}

pub fn handle(args: WorkOrderArgs, render: Render, out: &mut impl Write) -> Result<()> {
    let order: WorkOrder = read_record(&args.file)?;
    order.validate()?;
    let status = order
        .status()
        .with_context(|| format!("cannot roll up work order {}", order.id))?;
    tracing::info!(
        work_order = %order.id,
        %status,
        attempts = order.attempts.len(),
        "rolled up work order"
    );

    show_work_order(&order, status, render, out)
}

fn show_work_order(
    order: &WorkOrder,
    status: RunStatus,
    render: Render,
    out: &mut impl Write,
) -> Result<()> {
    match render.format {
        OutputFormat::Json => {
            let attempts = order
                .attempts
                .iter()
                .map(|attempt| match attempt.status() {
                    Ok(s) => AttemptSummary::Rolled(AttemptReport::new(attempt, s)),
                    Err(_) => AttemptSummary::Empty { id: &attempt.id },
                })
                .collect();
            let report = WorkOrderReport {
                id: &order.id,
                status,
                attempts,
            };
            write_json(out, &report)
        }
        OutputFormat::Text => {
            writeln!(out, "Work order: {}", order.id)?;
            writeln!(
                out,
                "Status:     {}",
                color::status(status.as_str(), render.colorize)
            )?;
            writeln!(out, "Attempts:   {}", order.attempts.len())?;

            if order.attempts.is_empty() {
                return Ok(());
            }
            writeln!(out)?;

            let mut table = Table::new(
                vec![
                    Column::left("ATTEMPT").with_max(32),
                    Column::status("STATUS"),
                    Column::right("STEPS"),
                    Column::muted("DURATION"),
                ],
                render.colorize,
            );
            for attempt in &order.attempts {
                table.row(vec![
                    attempt.id.to_string(),
                    cell(attempt.status().ok()),
                    attempt.runs().len().to_string(),
                    cell(attempt.duration_ms().map(format_duration_ms)),
                ]);
            }
            table.render(out)?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "work_order_tests.rs"]
mod tests;
