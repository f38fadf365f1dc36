//! Configuration constants.
//!
//! This module defines the defaults used by the TLD fetcher and the scanner.

use std::time::Duration;

/// IANA-maintained list of every delegated top-level domain, one per line.
pub const IANA_TLD_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Per-request timeout for the TLD list download, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 30;
/// Per-request timeout for the TLD list download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(FETCH_TIMEOUT_SECS);

/// User-Agent sent with the TLD list download.
pub const DEFAULT_USER_AGENT: &str = concat!("sitesniper/", env!("CARGO_PKG_VERSION"));

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Maximum number of attempts (initial attempt + retries)
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// HTTP status code for "Too Many Requests"
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Column header of the exported CSV file.
pub const CSV_TLD_COLUMN: &str = "tld";
