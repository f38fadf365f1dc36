//! Download of the TLD listing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use super::{parse_tld_listing, TldList};
use crate::config::{FETCH_TIMEOUT, IANA_TLD_URL, RETRY_INITIAL_DELAY_MS, RETRY_MAX_ATTEMPTS};
use crate::error_handling::{get_retry_strategy, is_transient, NetworkError};
use crate::initialization::init_client;

/// Downloads the TLD listing with a per-request timeout and bounded retries.
///
/// # Example
///
/// ```no_run
/// use sitesniper::TldFetcher;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let list = TldFetcher::default().fetch().await?;
/// println!("{} TLDs ({})", list.len(), list.release.raw);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TldFetcher {
    url: String,
    timeout: Duration,
    max_attempts: usize,
    retry_delay: Duration,
}

impl Default for TldFetcher {
    fn default() -> Self {
        Self::new(IANA_TLD_URL)
    }
}

impl TldFetcher {
    /// Fetcher for `url` with default timeout and retry settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: FETCH_TIMEOUT,
            max_attempts: RETRY_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(RETRY_INITIAL_DELAY_MS),
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the total number of attempts (at least one is always made).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the delay before the first retry; later delays grow exponentially.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Source URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads and parses the listing.
    ///
    /// Connection failures, timeouts, 5xx and 429 responses are retried up to
    /// the configured number of attempts. Other failures are returned at once.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` when the source stays unreachable, answers
    /// with an error status, or serves something that is not a TLD listing.
    pub async fn fetch(&self) -> Result<TldList, NetworkError> {
        let client = Arc::new(init_client(self.timeout)?);
        let attempts = Arc::new(AtomicU32::new(0));

        let result = tokio_retry::RetryIf::spawn(
            get_retry_strategy(self.retry_delay, self.max_attempts),
            {
                let client = Arc::clone(&client);
                let attempts = Arc::clone(&attempts);
                let url = self.url.clone();
                move || {
                    let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    let client = Arc::clone(&client);
                    let url = url.clone();
                    async move {
                        debug!("Fetching TLD list from {url} (attempt {attempt})");
                        let result = fetch_once(&client, &url).await;
                        if let Err(ref e) = result {
                            if is_transient(e) {
                                warn!("Attempt {attempt} to fetch {url} failed: {e}");
                            }
                        }
                        result
                    }
                }
            },
            is_transient,
        )
        .await;

        let list = result?;
        info!("IANA.org TLDs: {}", list.release.raw);
        info!("{} TLDs found", list.len());
        Ok(list)
    }
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> Result<TldList, NetworkError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.text().await?;
    parse_tld_listing(&body)
}
