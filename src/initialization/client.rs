//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::DEFAULT_USER_AGENT;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to download the TLD list.
///
/// Creates a `reqwest::Client` configured with:
/// - The crate's User-Agent header
/// - An overall per-request timeout
/// - A connect timeout capped at the request timeout
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(timeout: Duration) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
