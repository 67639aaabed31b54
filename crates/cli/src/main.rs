// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gfs - grandfather-father-son backup rotation
//!
//! Reads backup names from stdin and prints the ones to forget (or, with
//! `--keep`, the ones to keep). Nothing is deleted.

mod color;
mod config;
mod env;
mod exit_error;
mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Overrides;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "gfs",
    version,
    styles = color::styles(),
    about = "Pick which timestamped backups to keep",
    long_about = "Reads backup names from stdin, one per line. Each name must end in a \
        YYYYMMDDhhmmss timestamp, optionally behind directories and followed by an \
        extension; other lines are ignored. Prints the backups to forget, or the \
        ones to keep with --keep."
)]
struct Cli {
    /// Keep the latest backup of each minute, for this many minutes [default: 180]
    #[arg(long, value_name = "N")]
    minutes: Option<u32>,

    /// Keep the latest backup of each hour, for this many hours [default: 72]
    #[arg(long, value_name = "N")]
    hours: Option<u32>,

    /// Keep the latest backup of each day, for this many days [default: 21]
    #[arg(long, value_name = "N")]
    days: Option<u32>,

    /// Keep the latest backup of each week, for this many weeks [default: 12]
    #[arg(long, value_name = "N")]
    weeks: Option<u32>,

    /// Keep the latest backup of each month, for this many months [default: 36]
    #[arg(long, value_name = "N")]
    months: Option<u32>,

    /// Keep the latest backup of each year, for this many years [default: 15]
    #[arg(long, value_name = "N")]
    years: Option<u32>,

    /// Print the backups to keep instead of the ones to forget
    #[arg(long)]
    keep: bool,

    /// TOML config file (also read from GFS_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,

    /// Log rotation decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            minutes: self.minutes,
            hours: self.hours,
            days: self.days,
            weeks: self.weeks,
            months: self.months,
            years: self.years,
            keep: self.keep,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("gfs: {}", exit.message);
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("gfs: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings =
        config::resolve(cli.config.as_deref(), &cli.overrides()).map_err(ExitError::from)?;

    let lines = input::read_lines(std::io::stdin().lock()).map_err(ExitError::input)?;
    tracing::debug!(lines = lines.len(), "read input");

    let plan = gfs_core::plan(gfs_core::parse_lines(&lines), &settings.quotas);

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    output::write_names(&mut out, plan.emit(settings.mode), cli.output)
}
