//! CLI argument definitions for the specification generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "esdf-specgen",
    version,
    about = "ESDF specification generator - derive documentation and headers from a metadata schema",
    long_about = "Generate derived artifacts from a hand-authored ESDF metadata schema.\n\n\
                  Emits one reStructuredText document per group plus an index page,\n\
                  and C headers with identifier constants and specification tables."
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
    /// Render reStructuredText documentation for every group.
    Docs(DocsArgs),

    /// Emit C identifier and specification-table headers.
    Headers(HeadersArgs),

    /// Cross-check the schema and print a summary without writing output.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct DocsArgs {
    /// Path to the schema JSON document.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Output directory for generated documents (default: docs).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "docs")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// Path to the schema JSON document.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Output directory for generated headers (default: include).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "include")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the schema JSON document.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
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
