//! Loading of scan text and TLD files.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::CSV_TLD_COLUMN;
use crate::export::read_tlds_csv;
use crate::tld::parse_tld_listing;

/// Reads the text to scan from a file, or from stdin when `path` is `-`.
pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        log::debug!("Reading text from stdin");
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read text file: {}", path.display()))
}

/// Loads a TLD list from disk.
///
/// Accepted layouts:
/// - CSV with a `tld` header (as written by `sitesniper tlds --format csv`)
/// - The IANA listing (`#` header line, one TLD per line)
/// - One TLD per line
pub fn load_tlds_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read TLD file: {}", path.display()))?;

    let first_line = contents.lines().map(str::trim).find(|l| !l.is_empty());
    if first_line == Some(CSV_TLD_COLUMN) {
        return read_tlds_csv(path)
            .with_context(|| format!("Failed to read TLD CSV: {}", path.display()));
    }
    parse_tlds_text(&contents)
        .with_context(|| format!("Failed to parse TLD file: {}", path.display()))
}

/// Parses a TLD list held in memory (IANA listing or one TLD per line).
pub fn parse_tlds_text(contents: &str) -> Result<Vec<String>> {
    let contents = contents.trim_start();
    if contents.starts_with('#') {
        return Ok(parse_tld_listing(contents)?.into_tlds());
    }
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tlds_text_iana_layout() {
        let tlds = parse_tlds_text("# Version 1\nCOM\nORG\n").unwrap();
        assert_eq!(tlds, vec!["com", "org"]);
    }

    #[test]
    fn test_parse_tlds_text_plain_lines() {
        let tlds = parse_tlds_text("com\n\n  NET \n").unwrap();
        assert_eq!(tlds, vec!["com", "net"]);
    }

    #[test]
    fn test_parse_tlds_text_header_only_fails() {
        assert!(parse_tlds_text("# Version 1\n").is_err());
    }
}
