// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lightning - workflow run status and trigger schedule tools

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod config;
mod env;
mod load;
mod logging;
mod output;
mod table;

use std::io::Write;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{cron, status, work_order};

use crate::config::Config;
use crate::output::{OutputFormat, Render};

#[derive(Parser)]
#[command(
    name = "lightning",
    version,
    about = "Lightning - workflow run status and trigger schedules"
)]
struct Cli {
    /// Output format [default: config `output.format`, else text]
    #[arg(short = 'o', long = "output", value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll up the status of one attempt from its step runs
    Status(status::StatusArgs),
    /// Show a work order's status across its attempts
    WorkOrder(work_order::WorkOrderArgs),
    /// Cron expression tools for trigger schedules
    Cron(cron::CronArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an error for display, dropping causes already in the top-level message.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load()?;
    let render = Render {
        format: config.output_format(cli.output),
        colorize: color::should_colorize(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Status(args) => status::handle(args, render, &mut out)?,
        Commands::WorkOrder(args) => work_order::handle(args, render, &mut out)?,
        Commands::Cron(args) => cron::handle(args.command, &config, render, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
