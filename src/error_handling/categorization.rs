//! Retry strategy and failure classification for the TLD download.

use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;

use super::types::NetworkError;
use crate::config::{HTTP_STATUS_TOO_MANY_REQUESTS, RETRY_FACTOR, RETRY_MAX_DELAY_SECS};

/// Creates an exponential backoff retry strategy.
///
/// Returns the delays to wait between attempts:
/// - First delay: `initial_delay`
/// - Each following delay is multiplied by `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - At most `max_attempts - 1` delays, so the operation runs `max_attempts` times in total
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::RetryIf`.
pub fn get_retry_strategy(
    initial_delay: Duration,
    max_attempts: usize,
) -> impl Iterator<Item = Duration> {
    // ExponentialBackoff yields factor * base^n, so base carries the growth rate
    // and factor scales the first delay.
    let scale = (initial_delay.as_millis() as u64 / RETRY_FACTOR).max(1);
    ExponentialBackoff::from_millis(RETRY_FACTOR)
        .factor(scale)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(max_attempts.saturating_sub(1))
}

/// Determines if a download failure is worth retrying.
///
/// # Retriable
///
/// - Network timeouts and connection failures
/// - Server errors (5xx HTTP status codes)
/// - Rate limiting (429 Too Many Requests)
///
/// # Non-Retriable
///
/// - Client errors (4xx HTTP status codes, except 429)
/// - Bodies that do not look like a TLD listing
/// - HTTP client construction failures
pub fn is_transient(error: &NetworkError) -> bool {
    match error {
        NetworkError::Status { status, .. } => {
            status.as_u16() == HTTP_STATUS_TOO_MANY_REQUESTS || status.is_server_error()
        }
        NetworkError::Request(err) => {
            if let Some(status) = err.status() {
                return status.as_u16() == HTTP_STATUS_TOO_MANY_REQUESTS
                    || status.is_server_error();
            }
            if err.is_builder() || err.is_redirect() || err.is_decode() {
                return false;
            }
            err.is_timeout() || err.is_connect() || err.is_request() || err.is_body()
        }
        NetworkError::UnexpectedContent(_) | NetworkError::Client(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn status_error(status: StatusCode) -> NetworkError {
        NetworkError::Status {
            url: "http://127.0.0.1/tlds.txt".to_string(),
            status,
        }
    }

    #[test]
    fn test_get_retry_strategy_initial_delay() {
        let mut strategy = get_retry_strategy(Duration::from_millis(500), 3);
        let first_delay = strategy.next().unwrap();
        assert_eq!(first_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_get_retry_strategy_exponential_backoff() {
        let delays: Vec<Duration> = get_retry_strategy(Duration::from_millis(100), 5).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(800),
            ]
        );
    }

    #[test]
    fn test_get_retry_strategy_max_delay() {
        let max_delay_ms = RETRY_MAX_DELAY_SECS * 1000;
        for delay in get_retry_strategy(Duration::from_secs(2), 10) {
            assert!(
                delay.as_millis() <= max_delay_ms as u128,
                "Delay {}ms exceeds max {}ms",
                delay.as_millis(),
                max_delay_ms
            );
        }
    }

    #[test]
    fn test_get_retry_strategy_max_attempts() {
        assert_eq!(get_retry_strategy(Duration::from_millis(10), 3).count(), 2);
        assert_eq!(get_retry_strategy(Duration::from_millis(10), 1).count(), 0);
        assert_eq!(get_retry_strategy(Duration::from_millis(10), 0).count(), 0);
    }

    #[test]
    fn test_is_transient_server_errors() {
        assert!(is_transient(&status_error(StatusCode::INTERNAL_SERVER_ERROR)));
        assert!(is_transient(&status_error(StatusCode::BAD_GATEWAY)));
        assert!(is_transient(&status_error(StatusCode::SERVICE_UNAVAILABLE)));
    }

    #[test]
    fn test_is_transient_rate_limited() {
        assert!(is_transient(&status_error(StatusCode::TOO_MANY_REQUESTS)));
    }

    #[test]
    fn test_is_transient_client_errors() {
        assert!(!is_transient(&status_error(StatusCode::NOT_FOUND)));
        assert!(!is_transient(&status_error(StatusCode::FORBIDDEN)));
        assert!(!is_transient(&status_error(StatusCode::UNAUTHORIZED)));
    }

    #[test]
    fn test_is_transient_unexpected_content() {
        let err = NetworkError::UnexpectedContent("<html>".to_string());
        assert!(!is_transient(&err));
    }
}
