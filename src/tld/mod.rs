//! TLD list model and parsing of the IANA listing format.
//!
//! The listing is plain text: a `# ` comment header carrying release
//! metadata, then one upper-case TLD per line.
//!
//! ```text
//! # Version 2024061000, Last Updated Mon Jun 10 07:07:01 2024 UTC
//! AAA
//! AARP
//! ...
//! ```

mod fetch;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error_handling::NetworkError;

pub use fetch::TldFetcher;

/// Release metadata from the listing header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TldRelease {
    /// Header text without the leading `# `
    pub raw: String,
    /// Numeric version (`2024061000`)
    pub version: Option<u64>,
    /// "Last Updated" timestamp
    pub last_updated: Option<DateTime<Utc>>,
}

impl TldRelease {
    /// Parses a header line such as
    /// `# Version 2024061000, Last Updated Mon Jun 10 07:07:01 2024 UTC`.
    ///
    /// Unknown header layouts keep their raw text with no version or date.
    pub fn parse(header: &str) -> Self {
        let raw = header.trim_start_matches('#').trim().to_string();
        let mut version = None;
        let mut last_updated = None;

        for part in raw.split(',') {
            let part = part.trim();
            if let Some(v) = part.strip_prefix("Version") {
                version = v.trim().parse().ok();
            } else if let Some(date) = part.strip_prefix("Last Updated") {
                last_updated = parse_release_date(date);
            }
        }

        Self {
            raw,
            version,
            last_updated,
        }
    }
}

fn parse_release_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim().trim_end_matches("UTC").trim();
    let normalized = date.split_whitespace().collect::<Vec<_>>().join(" ");
    match NaiveDateTime::parse_from_str(&normalized, "%a %b %d %H:%M:%S %Y") {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            log::debug!("Unrecognized release date {date:?}: {e}");
            None
        }
    }
}

/// Ordered list of top-level domains with its release metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldList {
    /// Release the list was taken from
    pub release: TldRelease,
    tlds: Vec<String>,
}

impl TldList {
    /// Builds a list from already-normalized TLDs.
    pub fn new(release: TldRelease, tlds: Vec<String>) -> Self {
        Self { release, tlds }
    }

    /// TLDs in source order.
    pub fn tlds(&self) -> &[String] {
        &self.tlds
    }

    /// Number of TLDs.
    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    /// True if the list holds no TLD.
    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    /// Consumes the list, returning the TLDs.
    pub fn into_tlds(self) -> Vec<String> {
        self.tlds
    }
}

/// Parses the body of the IANA listing.
///
/// The first line must be a `#` comment and is kept only as release
/// metadata; remaining lines are trimmed and lowercased, blank lines are
/// dropped, order is preserved.
///
/// # Errors
///
/// `NetworkError::UnexpectedContent` if the body is empty, does not start
/// with a comment header, or contains no TLD.
pub fn parse_tld_listing(body: &str) -> Result<TldList, NetworkError> {
    let mut lines = body.lines();
    let header = lines
        .next()
        .map(str::trim)
        .filter(|line| line.starts_with('#'))
        .ok_or_else(|| {
            NetworkError::UnexpectedContent(format!(
                "expected a '#' header line, got {:?}",
                body.lines().next().unwrap_or("").chars().take(80).collect::<String>()
            ))
        })?;

    let release = TldRelease::parse(header);
    let tlds: Vec<String> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    if tlds.is_empty() {
        return Err(NetworkError::UnexpectedContent(
            "listing contains no TLDs".to_string(),
        ));
    }

    Ok(TldList::new(release, tlds))
}
