//! sitesniper library: TLD list download and URL/domain detection in text.
//!
//! This library fetches the current list of top-level domains from IANA and
//! uses it to detect or extract URLs and domain names (with or without
//! subdomains) mentioned in free text.
//!
//! # Example
//!
//! ```no_run
//! use sitesniper::{fetch_tlds, scan, FetchOptions, FetchOutput, ScanOptions, TldFetcher};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let FetchOutput::List(tlds) = fetch_tlds(&TldFetcher::default(), &FetchOptions::default()).await?
//! else {
//!     unreachable!("list is the default output");
//! };
//!
//! let text = "Mirrors: https://example.com/releases and news.example.org";
//! let found = scan(text, tlds.tlds(), &ScanOptions::extract().subdomains(false))?;
//! println!("{:?}", found);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. Scanning is synchronous and does no I/O.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod scan;
mod tld;

// Re-export public API
pub use config::OutputFormat;
pub use domain::RegisteredDomainStrategy;
pub use error_handling::{ExportError, NetworkError, ScanError};
pub use run::{fetch_tlds, FetchOptions, FetchOutput};
pub use scan::{scan, ScanMode, ScanOptions, ScanOutcome, Scanner};
pub use tld::{parse_tld_listing, TldFetcher, TldList, TldRelease};

// Fetch-and-present entry point
mod run {
    use std::path::PathBuf;

    use log::{error, info};

    use crate::config::OutputFormat;
    use crate::error_handling::{ExportError, NetworkError};
    use crate::export::{write_tlds_csv, TldTable};
    use crate::tld::{TldFetcher, TldList};

    /// How `fetch_tlds` presents the downloaded list.
    #[derive(Debug, Clone, Default)]
    pub struct FetchOptions {
        /// Output format
        pub format: OutputFormat,
        /// Destination for `OutputFormat::Csv`
        pub csv_path: Option<PathBuf>,
    }

    /// What `fetch_tlds` produced.
    #[derive(Debug)]
    pub enum FetchOutput {
        /// The list itself
        List(TldList),
        /// A tabular view of the list
        Table(TldTable),
        /// The list was written to this CSV file
        Exported {
            /// File written
            path: PathBuf,
            /// Rows written (header excluded)
            rows: usize,
        },
        /// CSV export failed; the download itself succeeded
        ExportFailed(ExportError),
    }

    impl FetchOutput {
        /// True unless the CSV export failed.
        pub fn is_success(&self) -> bool {
            !matches!(self, FetchOutput::ExportFailed(_))
        }
    }

    /// Downloads the TLD list and presents it as requested.
    ///
    /// Export problems (no CSV path, unwritable file) do not abort the call:
    /// they are logged and returned as `FetchOutput::ExportFailed`.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the list cannot be downloaded.
    pub async fn fetch_tlds(
        fetcher: &TldFetcher,
        options: &FetchOptions,
    ) -> Result<FetchOutput, NetworkError> {
        let list = fetcher.fetch().await?;
        Ok(present(list, options))
    }

    pub(crate) fn present(list: TldList, options: &FetchOptions) -> FetchOutput {
        match options.format {
            OutputFormat::List => {
                info!("Returned list of TLDs");
                FetchOutput::List(list)
            }
            OutputFormat::Table => {
                info!("TLD table created");
                FetchOutput::Table(TldTable::new(list.tlds()))
            }
            OutputFormat::Csv => {
                let Some(path) = options.csv_path.clone() else {
                    error!("No CSV path provided");
                    return FetchOutput::ExportFailed(ExportError::MissingPath);
                };
                match write_tlds_csv(&path, list.tlds()) {
                    Ok(rows) => FetchOutput::Exported { path, rows },
                    Err(e) => {
                        error!("CSV export failed: {e}");
                        FetchOutput::ExportFailed(e)
                    }
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::tld::TldRelease;

        fn sample_list() -> TldList {
            TldList::new(
                TldRelease::default(),
                vec!["aaa".to_string(), "com".to_string()],
            )
        }

        #[test]
        fn test_present_list() {
            let output = present(sample_list(), &FetchOptions::default());
            match output {
                FetchOutput::List(list) => assert_eq!(list.tlds(), &["aaa", "com"]),
                other => panic!("unexpected output: {other:?}"),
            }
        }

        #[test]
        fn test_present_table() {
            let options = FetchOptions {
                format: OutputFormat::Table,
                csv_path: None,
            };
            match present(sample_list(), &options) {
                FetchOutput::Table(table) => assert_eq!(table.rows(), &["aaa", "com"]),
                other => panic!("unexpected output: {other:?}"),
            }
        }

        #[test]
        fn test_present_csv_without_path_is_non_fatal_failure() {
            let options = FetchOptions {
                format: OutputFormat::Csv,
                csv_path: None,
            };
            let output = present(sample_list(), &options);
            assert!(!output.is_success());
            assert!(matches!(
                output,
                FetchOutput::ExportFailed(ExportError::MissingPath)
            ));
        }
    }
}
