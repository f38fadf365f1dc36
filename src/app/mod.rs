//! Command implementations used by the CLI binary.
//!
//! This module provides input loading (text and TLD files) and the two
//! subcommands, each returning the process exit code.

pub mod commands;
pub mod input;

// Re-export public API
pub use commands::{run_scan_command, run_tlds_command, EXIT_EXPORT_FAILED, EXIT_OK};
pub use input::{load_tlds_file, parse_tlds_text, read_text};
