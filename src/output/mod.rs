//! Output formatting for CLI results

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

pub use table::{FixedColumns, NO_RESULTS};

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Display rows plus the header shown above them
#[derive(Debug, Clone)]
pub struct Listing<T> {
    header: Vec<String>,
    rows: Vec<T>,
}

impl<T: FixedColumns> Listing<T> {
    /// Rows under the header declared by their `Tabled` derive
    pub fn new(rows: Vec<T>) -> Self {
        let header = T::headers().into_iter().map(|h| h.into_owned()).collect();
        Self { header, rows }
    }

    /// Rows under a header chosen at runtime
    pub fn with_header(header: Vec<String>, rows: Vec<T>) -> Self {
        Self { header, rows }
    }
}

impl<T: FixedColumns + Serialize> Formattable for Listing<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(&self.rows)?),
            _ if self.rows.is_empty() => Ok(NO_RESULTS.to_string()),
            OutputFormat::Table => Ok(table::format_aligned(
                &self.header,
                T::WIDTHS,
                self.rows.iter().map(|row| row.fields()),
            )),
            OutputFormat::Pretty => Ok(table::format_table(&self.header, &self.rows)),
        }
    }
}
