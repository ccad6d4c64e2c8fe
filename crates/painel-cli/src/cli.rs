//! CLI argument definitions for the panel validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "painel",
    version,
    about = "Panel roster validator - reconcile enrolment status against reference lists",
    long_about = "Validate an enrolment panel against the EDUCAPI and COMERCIAL reference lists.\n\n\
                  Appends state, status and lookup verdicts to every row and reports\n\
                  the rows that have no primary key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow primary keys and other row values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a panel and write the result workbooks.
    Process(ProcessArgs),

    /// Load a single file and show how it was read.
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Panel roster (workbook or delimited text).
    #[arg(long = "panel", value_name = "FILE")]
    pub panel: PathBuf,

    /// EDUCAPI reference list.
    #[arg(long = "educapi", value_name = "FILE")]
    pub educapi: Option<PathBuf>,

    /// COMERCIAL reference list.
    #[arg(long = "comercial", value_name = "FILE")]
    pub comercial: Option<PathBuf>,

    /// TOML file with a [columns] table.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for the workbooks (default: the panel's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub columns: ColumnArgs,
}

/// Column name overrides; they take precedence over the config file.
#[derive(Args)]
pub struct ColumnArgs {
    /// Panel column holding the state name.
    #[arg(long = "state-column", value_name = "NAME")]
    pub state: Option<String>,

    /// Panel column holding the recorded status.
    #[arg(long = "status-column", value_name = "NAME")]
    pub status: Option<String>,

    /// Panel column holding the primary key.
    #[arg(long = "key-column", value_name = "NAME")]
    pub key: Option<String>,

    /// Key column of the reference lists.
    #[arg(long = "reference-key-column", value_name = "NAME")]
    pub reference_key: Option<String>,
}

#[derive(Args)]
pub struct InspectArgs {
    /// File to load.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
