//! Command-line definition for the `mutant` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mutant_core::classifier::DirectionSet;
use mutant_core::config::CliOverrides;

use crate::outcome::CheckOutcome;

pub const EXIT_OK: u8 = 0;
pub const EXIT_INTERNAL: u8 = 1;
pub const EXIT_REJECTED: u8 = 2;
pub const EXIT_HUMAN: u8 = 3;
pub const EXIT_UNPROCESSABLE: u8 = 4;

#[derive(Parser, Debug)]
#[command(name = "mutant", version, about = "Classify DNA grids and inspect stored samples")]
pub struct Cli {
    #[arg(long, global = true, help = "Database file (overrides config)")]
    pub db: Option<String>,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root used for mutant.toml lookup and relative paths"
    )]
    pub root: PathBuf,
    #[arg(long, global = true, help = "Length of a qualifying run")]
    pub run_length: Option<usize>,
    #[arg(long, global = true, help = "Qualifying runs needed for a mutant verdict")]
    pub quota: Option<usize>,
    #[arg(
        long,
        global = true,
        default_value_t = false,
        help = "Scan right, down and down-right twice instead of all four axes"
    )]
    pub legacy_directions: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Classify a `{"dna": [...]}` body read from FILE, or stdin with `-`.
    Check { input: String },
    /// Print counts and ratios.
    Stats,
    /// Delete every stored sample and counter.
    Purge,
}

impl Cli {
    /// Flags that override file and environment configuration.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            run_length: self.run_length,
            quota: self.quota,
            directions: self.legacy_directions.then_some(DirectionSet::Legacy),
            db_path: self.db.clone(),
        }
    }
}

/// Process exit code for a check outcome.
pub fn exit_code(outcome: &CheckOutcome) -> u8 {
    match outcome {
        CheckOutcome::Mutant => EXIT_OK,
        CheckOutcome::Human => EXIT_HUMAN,
        CheckOutcome::Unprocessable { .. } => EXIT_UNPROCESSABLE,
        CheckOutcome::Rejected { .. } => EXIT_REJECTED,
    }
}
