//! CLI argument definitions for the checkup processor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "checkup",
    version,
    about = "Derive per-person checkup status from a station export",
    long_about = "Derive per-person health checkup status from a station export.\n\n\
                  Reads an Excel/ODS workbook, a CSV file, or a directory of CSV files\n\
                  and writes the processed persons and active stations as JSON."
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

    /// Allow names and employee ids in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a checkup export and emit the result as JSON.
    Process(ProcessArgs),

    /// List the station catalog.
    Stations,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Workbook, CSV file, or directory of CSV files.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the JSON result to this file and print a summary instead.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML file overriding sheet names and note column positions.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long = "compact")]
    pub compact: bool,
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
