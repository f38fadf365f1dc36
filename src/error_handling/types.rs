//! Error type definitions.
//!
//! This module defines all error types surfaced by the library.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures while downloading or reading the TLD list.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] InitializationError),

    /// The request failed before a response was received (DNS, connect, timeout, body read).
    #[error("Request to TLD source failed: {0}")]
    Request(#[from] ReqwestError),

    /// The server answered with a non-success status code.
    #[error("TLD source {url} returned {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code returned by the server
        status: StatusCode,
    },

    /// The body does not look like a TLD listing.
    #[error("Unexpected content from TLD source: {0}")]
    UnexpectedContent(String),
}

/// Errors returned by the text scanner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Empty text, empty TLD list or an options combination that asks for nothing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while exporting or re-reading a TLD list.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV export was requested without a destination.
    #[error("No CSV path provided")]
    MissingPath,

    /// The destination could not be created or read.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being written or read
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV file does not have the expected `tld` header.
    #[error("Unexpected CSV header: expected \"{expected}\", found \"{found}\"")]
    Header {
        /// Expected column name
        expected: &'static str,
        /// Header that was found
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_message() {
        let err = ScanError::InvalidArgument("No TLDs provided".to_string());
        assert_eq!(err.to_string(), "Invalid argument: No TLDs provided");
    }

    #[test]
    fn test_network_error_status_message() {
        let err = NetworkError::Status {
            url: "https://data.iana.org/TLD/tlds-alpha-by-domain.txt".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "TLD source https://data.iana.org/TLD/tlds-alpha-by-domain.txt returned 404 Not Found"
        );
    }

    #[test]
    fn test_export_error_missing_path_message() {
        assert_eq!(ExportError::MissingPath.to_string(), "No CSV path provided");
    }

    #[test]
    fn test_export_error_header_message() {
        let err = ExportError::Header {
            expected: "tld",
            found: "domain".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected CSV header: expected \"tld\", found \"domain\""
        );
    }
}
