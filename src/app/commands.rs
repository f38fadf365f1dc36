//! `tlds` and `scan` subcommands.

use std::io::Write;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::config::{ScanArgs, SourceArgs, TldsArgs};
use crate::scan::{ScanMode, ScanOptions, ScanOutcome, Scanner};
use crate::tld::TldFetcher;
use crate::{fetch_tlds, FetchOptions, FetchOutput};

use super::input::{load_tlds_file, read_text};

/// Exit code of a successful command.
pub const EXIT_OK: i32 = 0;
/// Exit code when the list was downloaded but the CSV export failed.
pub const EXIT_EXPORT_FAILED: i32 = 2;

fn fetcher_from(source: &SourceArgs) -> TldFetcher {
    TldFetcher::new(source.source_url.clone())
        .with_timeout(Duration::from_secs(source.timeout_seconds))
        .with_max_attempts(source.max_attempts)
}

/// Runs `sitesniper tlds`, printing to `out`.
pub async fn run_tlds_command<W: Write>(args: &TldsArgs, out: &mut W) -> Result<i32> {
    let options = FetchOptions {
        format: args.format,
        csv_path: args.csv_path.clone(),
    };
    let output = fetch_tlds(&fetcher_from(&args.source), &options)
        .await
        .context("Failed to fetch TLD list")?;

    match output {
        FetchOutput::List(list) => {
            for tld in list.tlds() {
                writeln!(out, "{tld}")?;
            }
        }
        FetchOutput::Table(table) => write!(out, "{table}")?,
        FetchOutput::Exported { path, rows } => {
            writeln!(out, "Saved {rows} TLDs to {}", path.display())?;
        }
        FetchOutput::ExportFailed(e) => {
            eprintln!("sitesniper export error: {e}");
            return Ok(EXIT_EXPORT_FAILED);
        }
    }
    Ok(EXIT_OK)
}

/// Builds scanner options from the CLI flags.
pub fn scan_options(args: &ScanArgs) -> ScanOptions {
    ScanOptions {
        mode: if args.detect {
            ScanMode::Detect
        } else {
            ScanMode::Extract
        },
        want_domain: !args.no_domain,
        want_url: !args.no_url,
        want_subdomain: !args.no_subdomain,
        registered_domain: args.registered_domain,
        anchored_detect: args.anchored,
    }
}

/// Runs `sitesniper scan`, printing to `out`.
pub async fn run_scan_command<W: Write>(args: &ScanArgs, out: &mut W) -> Result<i32> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_text(path)?,
        (None, None) => bail!("No text provided: pass TEXT or --file"),
    };

    let tlds = match &args.tlds_file {
        Some(path) => load_tlds_file(path)?,
        None => fetcher_from(&args.source)
            .fetch()
            .await
            .context("Failed to fetch TLD list")?
            .into_tlds(),
    };

    let scanner = Scanner::new(&tlds)?;
    let outcome = scanner.scan(&text, &scan_options(args))?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
    } else {
        match outcome {
            ScanOutcome::Detected(found) => writeln!(out, "{found}")?,
            ScanOutcome::Extracted(matches) => {
                for found in matches {
                    writeln!(out, "{found}")?;
                }
            }
        }
    }
    Ok(EXIT_OK)
}
