// ABOUTME: Sentinela CLI - evaluate check-ins, score recovery, and build alert feeds from JSON
// ABOUTME: Thin file-in/JSON-out surface over the pure intelligence functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela
//!
//! Usage:
//! ```bash
//! # Classify one check-in (JSON file with the stored field names)
//! sentinela-cli evaluate --input checkin.json --sex F
//!
//! # Recovery score for one check-in
//! sentinela-cli score --input checkin.json
//!
//! # Alert feed + dashboard counts for a roster file
//! sentinela-cli alerts --input roster.json --reference-date 2025-06-10
//!
//! # Printable report numbers for one patient of a roster file
//! sentinela-cli report --input roster.json --patient p1
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sentinela::config::intelligence::IntelligenceConfig;
use sentinela::logging::LoggingConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sentinela-cli",
    about = "Sentinela clinical monitoring CLI",
    long_about = "Evaluates check-ins, computes recovery scores, and builds alert feeds from JSON files using the sentinela engine."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Threshold configuration file (JSON); defaults are the shipped rule table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify one check-in into a severity tier with reasons
    Evaluate {
        /// Check-in JSON file (a stored record or bare metric values)
        #[arg(long)]
        input: PathBuf,

        /// Biological sex code (M or F); omitted = unknown
        #[arg(long)]
        sex: Option<String>,
    },

    /// Compute the Hooper-Index recovery score for one check-in
    Score {
        /// Check-in JSON file (a stored record or bare metric values)
        #[arg(long)]
        input: PathBuf,
    },

    /// Build the alert feed and summary counts for a roster file
    Alerts {
        /// Roster JSON file (array of patients with check-in histories)
        #[arg(long)]
        input: PathBuf,

        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        reference_date: Option<String>,
    },

    /// Summarize one patient's recent metrics for a printable report
    Report {
        /// Roster JSON file (array of patients with check-in histories)
        #[arg(long)]
        input: PathBuf,

        /// Patient identifier inside the roster file
        #[arg(long)]
        patient: String,

        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        reference_date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig {
            level: "debug".into(),
            ..LoggingConfig::default()
        }
    } else {
        LoggingConfig::from_env()
    };
    logging.init()?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Evaluate { input, sex } => commands::evaluate(&input, sex.as_deref(), &config),
        Command::Score { input } => commands::score(&input, &config),
        Command::Alerts {
            input,
            reference_date,
        } => commands::alerts(&input, reference_date.as_deref(), &config),
        Command::Report {
            input,
            patient,
            reference_date,
        } => commands::report(&input, &patient, reference_date.as_deref(), &config),
    }
}

/// Load a threshold configuration override, or fall back to the defaults
fn load_config(path: Option<&std::path::Path>) -> Result<IntelligenceConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(IntelligenceConfig::from_json(&text)?)
        }
        None => Ok(IntelligenceConfig::default()),
    }
}
