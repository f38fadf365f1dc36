//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (source URL, timeouts, retry backoff)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, LogFormat, LogLevel, OutputFormat, ScanArgs, SourceArgs, TldsArgs};
