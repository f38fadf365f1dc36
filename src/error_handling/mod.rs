//! Error handling and retry policy.
//!
//! This module provides:
//! - Error type definitions for every library surface
//! - Retry strategy configuration
//! - Classification of transient vs permanent network failures

mod categorization;
mod types;

// Re-export public API
pub use categorization::{get_retry_strategy, is_transient};
pub use types::{ExportError, InitializationError, NetworkError, ScanError};
