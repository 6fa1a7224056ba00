//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "casas-clean",
    version,
    about = "Housing dataset cleaner - normalize, impute, and filter dirty house data",
    long_about = "Clean a noisy housing table into a training-ready dataset.\n\n\
                  Normalizes free-text field values, imputes missing entries from\n\
                  dataset-wide statistics, filters price outliers, and writes a\n\
                  machine-readable report of everything that was fixed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the dirty housing table and write the dataset and report.
    Clean(CleanArgs),

    /// Print descriptive statistics for a table without cleaning it.
    Explore(ExploreArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input CSV. Without it, casas_sucias.csv is probed in the
    /// current directory and then in /mnt/data.
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the clean dataset.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "data/casas_limpias.csv"
    )]
    pub output: PathBuf,

    /// Where to write the cleaning report.
    #[arg(
        long = "report",
        value_name = "PATH",
        default_value = "outputs/cleaning_report.json"
    )]
    pub report: PathBuf,
}

#[derive(Parser)]
pub struct ExploreArgs {
    /// Table to explore. Probes the conventional locations when omitted.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
