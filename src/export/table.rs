//! Tabular view of a TLD list.

use std::fmt;

use crate::config::CSV_TLD_COLUMN;

/// Single-column table of TLDs with a zero-based row index.
///
/// `Display` renders it as right-aligned text:
///
/// ```text
///     tld
/// 0   aaa
/// 1  aarp
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldTable {
    rows: Vec<String>,
}

impl TldTable {
    /// Builds a table from TLDs in source order.
    pub fn new<S: AsRef<str>>(tlds: &[S]) -> Self {
        Self {
            rows: tlds.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    /// Column name.
    pub fn column(&self) -> &'static str {
        CSV_TLD_COLUMN
    }

    /// Rows in order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TldTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let value_width = self
            .rows
            .iter()
            .map(|r| r.chars().count())
            .chain(std::iter::once(CSV_TLD_COLUMN.len()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:index_width$}  {:>value_width$}", "", CSV_TLD_COLUMN)?;
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(f, "{:<index_width$}  {:>value_width$}", i, row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_render() {
        let table = TldTable::new(&["aaa", "aarp", "com"]);
        assert_eq!(table.to_string(), "    tld\n0   aaa\n1  aarp\n2   com\n");
    }

    #[test]
    fn test_table_rows_keep_order() {
        let table = TldTable::new(&["zw", "aaa"]);
        assert_eq!(table.rows(), &["zw", "aaa"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column(), "tld");
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let empty: [&str; 0] = [];
        let table = TldTable::new(&empty);
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "   tld\n");
    }
}
