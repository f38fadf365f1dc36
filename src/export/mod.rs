//! Export functionality for TLD lists.
//!
//! This module renders a TLD list as a text table or writes it to (and reads
//! it back from) a single-column CSV file with a `tld` header.

mod csv;
mod table;

pub use csv::{read_tlds_csv, write_tlds_csv, write_tlds_csv_to};
pub use table::TldTable;
