//! Domain extraction and normalization utilities.
//!
//! This module turns the raw tokens found by the scanner into reportable
//! hosts:
//! - `host_candidate()` - Isolates the host part of a token (drops scheme, userinfo, path, port)
//! - `network_location()` - Normalized `host[:port]` of a token
//! - `extract_domain()` - Registrable domain via the Public Suffix List
//! - `last_two_labels()` - Registrable domain via a two-label heuristic

use std::sync::{Arc, LazyLock};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use tldextract::TldExtractor;

use crate::initialization::init_extractor;

static PSL_EXTRACTOR: LazyLock<Arc<TldExtractor>> = LazyLock::new(init_extractor);

/// How a host is reduced to its registered domain.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RegisteredDomainStrategy {
    /// One label plus the public suffix (`shop.example.co.uk` -> `example.co.uk`)
    #[default]
    PublicSuffix,
    /// The last two labels (`shop.example.co.uk` -> `co.uk`)
    LastTwoLabels,
}

impl RegisteredDomainStrategy {
    /// Reduces `host` to its registered domain.
    ///
    /// Returns `None` when the host has no registrable part (a bare suffix,
    /// a single label or an IP address).
    pub fn reduce(self, host: &str) -> Option<String> {
        match self {
            RegisteredDomainStrategy::PublicSuffix => {
                match extract_domain(&PSL_EXTRACTOR, &format!("http://{host}")) {
                    Ok(domain) => Some(domain),
                    Err(e) => {
                        log::debug!("No registered domain for {host}: {e:#}");
                        None
                    }
                }
            }
            RegisteredDomainStrategy::LastTwoLabels => last_two_labels(host),
        }
    }
}

/// Extracts the registrable domain from a URL using tldextract.
///
/// # Arguments
///
/// * `extractor` - The TldExtractor instance
/// * `url` - The URL to extract the domain from
///
/// # Returns
///
/// The registrable domain (e.g., "example.com" from "https://www.example.com/path")
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, if the URL is an IP address,
/// or if the host is only a public suffix.
pub fn extract_domain(extractor: &TldExtractor, url: &str) -> Result<String> {
    // tldextract is lenient, so validate first
    let parsed = url::Url::parse(url).with_context(|| format!("Failed to parse URL: {}", url))?;

    let host = match parsed.host() {
        Some(url::Host::Domain(host)) => host,
        Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => {
            return Err(anyhow::anyhow!(
                "IP addresses do not have registrable domains: {}",
                url
            ));
        }
        None => return Err(anyhow::anyhow!("URL '{}' has no host component", url)),
    };

    let result = extractor
        .extract(url)
        .with_context(|| format!("Failed to extract domain from URL: {}", url))?;

    match (result.domain, result.suffix) {
        (Some(domain), Some(suffix)) if !domain.is_empty() && !suffix.is_empty() => {
            Ok(format!("{}.{}", domain, suffix))
        }
        _ => Err(anyhow::anyhow!("No registrable domain in host: {}", host)),
    }
}

/// Registered domain by the two-label heuristic.
pub fn last_two_labels(host: &str) -> Option<String> {
    let host = host.trim_end_matches('.').to_lowercase();
    if host.parse::<std::net::IpAddr>().is_ok() {
        return None;
    }
    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return None;
    }
    Some(labels[labels.len() - 2..].join("."))
}

/// Host part of a token: scheme, userinfo, path, query, fragment and port removed.
///
/// `"https://user@news.example.com:8080/a?b"` -> `"news.example.com"`,
/// `"bob@example.org"` -> `"example.org"`.
pub fn host_candidate(token: &str) -> &str {
    let rest = match token.find("://") {
        Some(idx) => &token[idx + 3..],
        None => token,
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = match authority.rfind('@') {
        Some(idx) => &authority[idx + 1..],
        None => authority,
    };
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Network location (`host[:port]`) of a token, lowercased.
///
/// The host is reported as written (no IDNA conversion). Returns `None`
/// when the token does not parse as a URL with a host.
pub fn network_location(token: &str) -> Option<String> {
    let rest = token.split_once("://").map_or(token, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let netloc = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let parsed = url::Url::parse(&format!("http://{netloc}")).ok()?;
    parsed.host_str()?;
    Some(netloc.to_lowercase())
}

/// True when `host` ends with `.{tld}`, compared case-insensitively.
///
/// `tld` must already be lowercase.
pub fn has_tld_suffix(host: &str, tld: &str) -> bool {
    let host = host.as_bytes();
    let tld = tld.as_bytes();
    if host.len() <= tld.len() {
        return false;
    }
    let split = host.len() - tld.len();
    host[split - 1] == b'.' && host[split..].eq_ignore_ascii_case(tld)
}
