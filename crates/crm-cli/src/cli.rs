//! CLI argument definitions for the contact cleansing pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use crm_model::DEFAULT_DUP_KEY;

#[derive(Parser)]
#[command(
    name = "crm-cleanse",
    version,
    about = "CRM Cleanse - Normalize and quality-gate contact exports",
    long_about = "Clean customer records exported from a Dataverse CRM.\n\n\
                  Normalizes free text, canonicalizes email / Japanese phone /\n\
                  Japanese postal fields, parses dates, and fails the process\n\
                  when aggregate quality thresholds are breached."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Clean a contact export and run the quality gate.
    Clean(CleanArgs),

    /// List the canonicalized columns and their rules.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the exported contacts CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output path for the normalized CSV (default: <INPUT stem>_clean.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Column used for duplicate detection.
    #[arg(long = "dup-key", value_name = "COLUMN", default_value = DEFAULT_DUP_KEY)]
    pub dup_key: String,

    /// Write a machine-readable JSON quality report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Normalize and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit 0 even when the quality gate fails.
    ///
    /// By default a threshold breach terminates the process with status 2.
    /// The normalized CSV is written either way; this flag only changes the
    /// exit status.
    #[arg(long = "no-fail-on-quality")]
    pub no_fail_on_quality: bool,
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
