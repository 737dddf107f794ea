//! Command-line interface definitions.
//!
//! Defines the CLI structure for squadforge using `clap`: building a team
//! from a scored pool, listing the top players per position, and checking a
//! configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::Position;
use crate::infrastructure::config::settings::DEFAULT_CONFIG_FILE;

/// Budget-constrained fantasy squad, lineup and captaincy optimizer
#[derive(Parser, Debug)]
#[command(name = "squadforge")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select the optimal squad, lineup and captain from a scored pool
    Build(BuildArgs),

    /// Show the best players per position
    Top(TopArgs),

    /// Validate a configuration file
    Check(CheckArgs),
}

/// Arguments for `squadforge build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Scored player pool (JSON array or `{"players": [...]}`)
    #[arg(long, short = 'p')]
    pub players: PathBuf,

    /// Configuration file (defaults to squadforge.toml when present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Override the squad budget
    #[arg(long)]
    pub budget: Option<Decimal>,

    /// Stop searching after this many milliseconds (0 = no limit)
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    /// Search worker threads (0 = available CPUs)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Override the log level (e.g. debug, info, warn)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `squadforge top`.
#[derive(Args, Debug)]
pub struct TopArgs {
    /// Scored player pool (JSON array or `{"players": [...]}`)
    #[arg(long, short = 'p')]
    pub players: PathBuf,

    /// Players to show per position
    #[arg(short = 'n', long = "count", default_value_t = 5)]
    pub count: usize,

    /// Only show one position (GK, DEF, MID, FWD)
    #[arg(long)]
    pub position: Option<Position>,
}

/// Arguments for `squadforge check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration file to validate
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}
