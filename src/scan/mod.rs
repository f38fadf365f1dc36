//! Text scanning: detects or extracts URLs and domains in free text.
//!
//! The scanner is pure and stateless: the same text, TLD list and options
//! always produce the same outcome.
//!
//! # Example
//!
//! ```
//! use sitesniper::{scan, ScanOptions, ScanOutcome};
//!
//! let text = "Docs live at https://docs.rs/regex, mirrors at news.example.com";
//! let outcome = scan(text, &["com", "rs"], &ScanOptions::default()).unwrap();
//! assert_eq!(
//!     outcome,
//!     ScanOutcome::Extracted(vec![
//!         "https://docs.rs/regex".to_string(),
//!         "news.example.com".to_string(),
//!     ])
//! );
//! ```

mod patterns;
mod tokenize;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::{has_tld_suffix, host_candidate, network_location, RegisteredDomainStrategy};
use crate::error_handling::ScanError;

/// What the scanner returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Short-circuit existence check
    Detect,
    /// Collect every match in order of appearance
    #[default]
    Extract,
}

/// Scanner options.
///
/// Defaults: extract URLs and domains, keep subdomains, Public Suffix List
/// reduction, unanchored detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Detect or extract
    pub mode: ScanMode,
    /// Look for `name.tld` domains
    pub want_domain: bool,
    /// Look for URLs
    pub want_url: bool,
    /// Report full hosts (`news.example.com`) instead of registered domains (`example.com`)
    pub want_subdomain: bool,
    /// Reduction used when `want_subdomain` is false
    pub registered_domain: RegisteredDomainStrategy,
    /// Detect mode only: `.tld` must not be followed by a letter, digit or `-`
    pub anchored_detect: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: ScanMode::Extract,
            want_domain: true,
            want_url: true,
            want_subdomain: true,
            registered_domain: RegisteredDomainStrategy::PublicSuffix,
            anchored_detect: false,
        }
    }
}

impl ScanOptions {
    /// Default options in detect mode.
    pub fn detect() -> Self {
        Self {
            mode: ScanMode::Detect,
            ..Self::default()
        }
    }

    /// Default options in extract mode.
    pub fn extract() -> Self {
        Self::default()
    }

    /// Sets whether domains are looked for.
    pub fn domains(mut self, want: bool) -> Self {
        self.want_domain = want;
        self
    }

    /// Sets whether URLs are looked for.
    pub fn urls(mut self, want: bool) -> Self {
        self.want_url = want;
        self
    }

    /// Sets whether subdomain labels are kept.
    pub fn subdomains(mut self, want: bool) -> Self {
        self.want_subdomain = want;
        self
    }
}

/// Result of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanOutcome {
    /// Detect mode: whether anything was found
    Detected(bool),
    /// Extract mode: URLs first, then domains, each in order of appearance
    Extracted(Vec<String>),
}

impl ScanOutcome {
    /// True for `Detected(true)` or a non-empty extraction.
    pub fn found_any(&self) -> bool {
        match self {
            ScanOutcome::Detected(found) => *found,
            ScanOutcome::Extracted(matches) => !matches.is_empty(),
        }
    }

    /// Extracted matches; empty in detect mode.
    pub fn into_matches(self) -> Vec<String> {
        match self {
            ScanOutcome::Detected(_) => Vec::new(),
            ScanOutcome::Extracted(matches) => matches,
        }
    }
}

/// A scanner bound to a normalized TLD list.
///
/// Build it once and reuse it for many texts.
#[derive(Debug, Clone)]
pub struct Scanner {
    tlds: Vec<String>,
}

impl Scanner {
    /// Normalizes the TLD list (trimmed, leading dot removed, lowercased,
    /// blank entries dropped, duplicates removed keeping the first).
    ///
    /// # Errors
    ///
    /// `ScanError::InvalidArgument` if no TLD remains.
    pub fn new<S: AsRef<str>>(tlds: &[S]) -> Result<Self, ScanError> {
        let mut normalized: Vec<String> = Vec::with_capacity(tlds.len());
        for tld in tlds {
            let tld = tld.as_ref().trim().trim_start_matches('.').to_lowercase();
            if !tld.is_empty() && !normalized.contains(&tld) {
                normalized.push(tld);
            }
        }
        if normalized.is_empty() {
            return Err(ScanError::InvalidArgument(
                "No TLDs provided! Please provide a list of TLDs to search for.".to_string(),
            ));
        }
        Ok(Self { tlds: normalized })
    }

    /// Normalized TLDs in their original order.
    pub fn tlds(&self) -> &[String] {
        &self.tlds
    }

    /// Scans `text`.
    ///
    /// # Errors
    ///
    /// `ScanError::InvalidArgument` if `text` is empty or if the options ask
    /// for neither URLs nor domains.
    pub fn scan(&self, text: &str, options: &ScanOptions) -> Result<ScanOutcome, ScanError> {
        if text.is_empty() {
            return Err(ScanError::InvalidArgument(
                "No string provided! Please provide a string to parse.".to_string(),
            ));
        }
        if !options.want_domain && !options.want_url {
            return Err(ScanError::InvalidArgument(
                "Nothing to look for: enable URLs, domains or both.".to_string(),
            ));
        }

        match options.mode {
            ScanMode::Detect => Ok(ScanOutcome::Detected(self.detect(text, options))),
            ScanMode::Extract => Ok(ScanOutcome::Extracted(self.extract(text, options))),
        }
    }

    fn detect(&self, text: &str, options: &ScanOptions) -> bool {
        let found = (options.want_domain && self.contains_tld(text, options.anchored_detect))
            || (options.want_url && patterns::contains_url(text));
        if found {
            info!("Url(s) / Domain(s) found in string");
        } else {
            info!("No Url(s) / Domain(s) found in string");
        }
        found
    }

    /// Substring test for `.{tld}`.
    fn contains_tld(&self, text: &str, anchored: bool) -> bool {
        let lowered = text.to_lowercase();
        self.tlds.iter().any(|tld| {
            let needle = format!(".{tld}");
            lowered.match_indices(&needle).any(|(idx, _)| {
                !anchored
                    || lowered[idx + needle.len()..]
                        .chars()
                        .next()
                        .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '-'))
            })
        })
    }

    fn extract(&self, text: &str, options: &ScanOptions) -> Vec<String> {
        let spans = patterns::find_url_spans(text);
        let mut matches: Vec<String> = if options.want_url {
            spans.iter().map(|range| text[range.clone()].to_string()).collect()
        } else {
            Vec::new()
        };
        let url_count = matches.len();

        if options.want_domain {
            for token in tokenize::tokenize_with_urls(text, &spans) {
                // A reported URL is also a domain only when the URL itself ends in a TLD
                if token.is_url && options.want_url && !self.ends_with_tld(token.text) {
                    continue;
                }
                if let Some(domain) = self.domain_of(token.text, options) {
                    matches.push(domain);
                }
            }
        }

        match (options.want_url, options.want_domain) {
            (true, true) => info!(
                "Found {} URL(s) in string and {} domain(s)",
                url_count,
                matches.len() - url_count
            ),
            (true, false) => info!("Found {} URL(s) in string", url_count),
            _ => info!("Found {} domain(s) in string", matches.len()),
        }
        matches
    }

    fn ends_with_tld(&self, token: &str) -> bool {
        self.tlds.iter().any(|tld| has_tld_suffix(token, tld))
    }

    /// Reportable domain of a token, if its host ends with a known TLD.
    fn domain_of(&self, token: &str, options: &ScanOptions) -> Option<String> {
        let host = host_candidate(token);
        let tld = self.tlds.iter().find(|tld| has_tld_suffix(host, tld))?;
        debug!("Token {token:?} matches TLD {tld:?}");

        let netloc = network_location(token);
        if options.want_subdomain {
            return netloc;
        }
        let host = match netloc {
            Some(netloc) => host_candidate(&netloc).to_string(),
            None => host.to_lowercase(),
        };
        options.registered_domain.reduce(&host)
    }
}

/// Scans `text` for URLs and/or domains ending in one of `tlds`.
///
/// Shorthand for `Scanner::new(tlds)?.scan(text, options)`. The TLD list is
/// validated before the text.
///
/// # Errors
///
/// `ScanError::InvalidArgument` for an empty TLD list, empty text, or options
/// that ask for neither URLs nor domains.
pub fn scan<S: AsRef<str>>(
    text: &str,
    tlds: &[S],
    options: &ScanOptions,
) -> Result<ScanOutcome, ScanError> {
    Scanner::new(tlds)?.scan(text, options)
}
