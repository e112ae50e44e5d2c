// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lightning cron` - convert between cron expressions and trigger form fields

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lightning_trigger::{self as trigger, CronDescriptor, Frequency};
use serde::Serialize;

use crate::config::Config;
use crate::output::{write_json, OutputFormat, Render};

#[derive(Args)]
pub struct CronArgs {
    #[command(subcommand)]
    pub command: CronCommand,
}

#[derive(Subcommand)]
pub enum CronCommand {
    /// Show the form fields a cron expression maps to
    Parse {
        /// Cron expression, quoted (e.g. "30 18 * * 06")
        expression: String,
    },
    /// Build a cron expression from form fields
    Build(BuildArgs),
    /// Summarize a cron expression in one line
    Describe {
        /// Cron expression, quoted
        expression: String,
    },
}

#[derive(Args)]
pub struct BuildArgs {
    /// Expression to keep for custom schedules [default: config `cron.default`]
    #[arg(long)]
    pub previous: Option<String>,

    /// hourly, daily, weekly, monthly or custom
    #[arg(long, short = 'f')]
    pub frequency: Option<Frequency>,

    #[arg(long)]
    pub minute: Option<String>,

    #[arg(long)]
    pub hour: Option<String>,

    /// Day of week, 01 (Monday) to 07 (Sunday)
    #[arg(long)]
    pub weekday: Option<String>,

    /// Day of month, 01 to 31
    #[arg(long)]
    pub monthday: Option<String>,

    /// Reject fields that are not two-digit values in range
    #[arg(long)]
    pub validate: bool,
}

impl BuildArgs {
    fn descriptor(&self) -> CronDescriptor {
        CronDescriptor {
            frequency: self.frequency,
            minute: self.minute.clone(),
            hour: self.hour.clone(),
            weekday: self.weekday.clone(),
            monthday: self.monthday.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    expression: &'a str,
    description: String,
}

impl<'a> Summary<'a> {
    fn of(expression: &'a str) -> Self {
        Self {
            expression,
            description: trigger::describe(expression),
        }
    }
}

pub fn handle(
    command: CronCommand,
    config: &Config,
    render: Render,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        CronCommand::Parse { expression } => {
            let descriptor = trigger::parse(Some(expression.as_str()));
            match render.format {
                OutputFormat::Json => write_json(out, &descriptor),
                OutputFormat::Text => write_fields(&descriptor, out),
            }
        }
        CronCommand::Build(args) => {
            let descriptor = args.descriptor();
            if args.validate {
                trigger::validate(&descriptor).context("invalid schedule")?;
            }
            let previous = args
                .previous
                .as_deref()
                .unwrap_or_else(|| config.default_cron());
            let expression = trigger::build(previous, &descriptor);
            tracing::debug!(?descriptor, %expression, "built cron expression");
            match render.format {
                OutputFormat::Json => write_json(out, &Summary::of(&expression)),
                OutputFormat::Text => {
                    writeln!(out, "{expression}")?;
                    Ok(())
                }
            }
        }
        CronCommand::Describe { expression } => match render.format {
            OutputFormat::Json => write_json(out, &Summary::of(expression.trim())),
            OutputFormat::Text => {
                writeln!(out, "{}", trigger::describe(&expression))?;
                Ok(())
            }
        },
    }
}

fn write_fields(descriptor: &CronDescriptor, out: &mut impl Write) -> Result<()> {
    if let Some(frequency) = descriptor.frequency {
        writeln!(out, "frequency: {frequency}")?;
    }
    let fields = [
        ("minute", &descriptor.minute),
        ("hour", &descriptor.hour),
        ("weekday", &descriptor.weekday),
        ("monthday", &descriptor.monthday),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            writeln!(out, "{name}: {value}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
