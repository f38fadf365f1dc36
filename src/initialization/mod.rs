//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON output)
//! - HTTP client used for the TLD download
//! - Public Suffix List extractor used for registered-domain reduction

mod client;
mod logger;

use std::sync::Arc;

use tldextract::{TldExtractor, TldOption};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// Uses the suffix snapshot bundled with `tldextract`; no network access is
/// performed. Private-domain suffixes (e.g. `github.io`) are not treated as
/// public suffixes.
///
/// # Returns
///
/// An `Arc<TldExtractor>` that can be shared for domain extraction.
pub fn init_extractor() -> Arc<TldExtractor> {
    Arc::new(TldExtractor::new(TldOption::default()))
}
