//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use strum_macros::{Display, EnumIter};

use crate::config::constants::{FETCH_TIMEOUT_SECS, IANA_TLD_URL, RETRY_MAX_ATTEMPTS};
use crate::domain::RegisteredDomainStrategy;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How a fetched TLD list is handed back to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Ordered list of TLD strings
    #[default]
    List,
    /// Single-column table with a row index
    Table,
    /// CSV file with a `tld` header (requires a path)
    Csv,
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Print the current TLD list
/// sitesniper tlds
///
/// # Save it as CSV
/// sitesniper tlds --format csv --csv-path tlds.csv
///
/// # Extract URLs and domains from a file using a saved list
/// sitesniper scan --file notes.txt --tlds-file tlds.csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "sitesniper",
    version,
    about = "Fetches the IANA TLD list and finds URLs and domains in text."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the current TLD list
    Tlds(TldsArgs),
    /// Detect or extract URLs and domains in text
    Scan(ScanArgs),
}

/// Options shared by every command that downloads the TLD list.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// URL of the newline-delimited TLD list
    #[arg(long, default_value = IANA_TLD_URL)]
    pub source_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Total download attempts before giving up
    #[arg(long, default_value_t = RETRY_MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

/// Arguments of `sitesniper tlds`.
#[derive(Debug, Clone, Args)]
pub struct TldsArgs {
    /// Output format: list|table|csv
    #[arg(long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Destination file for `--format csv`
    #[arg(long, value_parser)]
    pub csv_path: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments of `sitesniper scan`.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Text to scan (alternatively use --file)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file ("-" for stdin)
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    /// Read TLDs from a file (CSV with a `tld` header or IANA text format)
    /// instead of downloading them
    #[arg(long, value_parser)]
    pub tlds_file: Option<PathBuf>,

    /// Only report whether anything was found
    #[arg(long)]
    pub detect: bool,

    /// Do not look for URLs
    #[arg(long)]
    pub no_url: bool,

    /// Do not look for domains
    #[arg(long)]
    pub no_domain: bool,

    /// Reduce domains to their registered domain (drop subdomain labels)
    #[arg(long)]
    pub no_subdomain: bool,

    /// How registered domains are computed when --no-subdomain is set
    #[arg(long, value_enum, default_value_t = RegisteredDomainStrategy::PublicSuffix)]
    pub registered_domain: RegisteredDomainStrategy,

    /// In detect mode, require a non-alphanumeric character after the TLD
    #[arg(long)]
    pub anchored: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}
