//! CSV export functionality.
//!
//! One column named `tld`, header row included, one TLD per row in source order.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Writer};

use crate::config::CSV_TLD_COLUMN;
use crate::error_handling::ExportError;

/// Writes `tlds` to a CSV file at `path`, replacing any existing file.
///
/// # Returns
///
/// The number of rows written (header excluded).
///
/// # Errors
///
/// `ExportError::Io` if the file cannot be created, `ExportError::Csv` if a
/// row cannot be written.
pub fn write_tlds_csv<S: AsRef<str>>(path: &Path, tlds: &[S]) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let count = write_tlds_csv_to(file, tlds)?;
    log::info!("CSV saved to {}", path.display());
    Ok(count)
}

/// Writes `tlds` as CSV to any writer (stdout, a buffer, a file).
pub fn write_tlds_csv_to<W: Write, S: AsRef<str>>(
    writer: W,
    tlds: &[S],
) -> Result<usize, ExportError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record([CSV_TLD_COLUMN])?;
    for tld in tlds {
        writer.write_record([tld.as_ref()])?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: "<writer>".to_string(),
        source,
    })?;
    Ok(tlds.len())
}

/// Reads a TLD CSV file written by [`write_tlds_csv`].
///
/// # Errors
///
/// `ExportError::Io` if the file cannot be opened, `ExportError::Header` if
/// the first column is not `tld`, `ExportError::Csv` on malformed rows.
pub fn read_tlds_csv(path: &Path) -> Result<Vec<String>, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_tlds_csv_from(file)
}

pub(crate) fn read_tlds_csv_from<R: Read>(reader: R) -> Result<Vec<String>, ExportError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let header = reader.headers()?.get(0).unwrap_or("").trim().to_string();
    if header != CSV_TLD_COLUMN {
        return Err(ExportError::Header {
            expected: CSV_TLD_COLUMN,
            found: header,
        });
    }

    let mut tlds = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(tld) = record.get(0).map(str::trim).filter(|t| !t.is_empty()) {
            tlds.push(tld.to_string());
        }
    }
    Ok(tlds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_buffer_has_header_and_rows() {
        let mut buffer = Vec::new();
        let count = write_tlds_csv_to(&mut buffer, &["aaa", "com", "zw"]).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(buffer).unwrap(), "tld\naaa\ncom\nzw\n");
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let err = read_tlds_csv_from("domain\nexample.com\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::Header { .. }));
    }

    #[test]
    fn test_read_skips_blank_rows() {
        let tlds = read_tlds_csv_from("tld\ncom\n\norg\n".as_bytes()).unwrap();
        assert_eq!(tlds, vec!["com", "org"]);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_tlds_csv(Path::new("/nonexistent/dir/tlds.csv")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
