//! Table output formatting
//!
//! Two renderers live here. [`format_aligned`] is the default: every column
//! but the last has a fixed width chosen per command, and a value wider than
//! its column pushes the rest of that line right instead of being cut or
//! widening the column for other rows. [`format_table`] is the bordered
//! variant used by `--format pretty`, sized to content by `tabled`.

use std::fmt::Write;

use tabled::{
    Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Printed instead of a table when there is nothing to show
pub const NO_RESULTS: &str = "No results found.";

/// Display rows with a fixed-width layout for [`format_aligned`].
pub trait FixedColumns: Tabled {
    /// Width of every column except the last, which is never padded
    const WIDTHS: &'static [usize];
}

/// Format a header and rows as left-justified fixed-width columns.
///
/// Cells are separated by one space. Widths are never derived from content.
pub fn format_aligned<R, C>(header: &[String], widths: &[usize], rows: R) -> String
where
    R: IntoIterator<Item = Vec<C>>,
    C: AsRef<str>,
{
    let mut lines = vec![aligned_line(header, widths)];
    lines.extend(rows.into_iter().map(|row| aligned_line(&row, widths)));
    lines.join("\n")
}

fn aligned_line<C: AsRef<str>>(cells: &[C], widths: &[usize]) -> String {
    let mut line = String::new();
    let last = cells.len().saturating_sub(1);

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        match widths.get(i) {
            Some(&width) if i < last => {
                // Writing to a String cannot fail
                let _ = write!(line, "{:<width$}", cell.as_ref(), width = width);
            }
            _ => line.push_str(cell.as_ref()),
        }
    }

    line
}

/// Format data as a bordered table under the given header
pub fn format_table<T: Tabled>(header: &[String], data: &[T]) -> String {
    if data.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(header.iter().cloned());
    for row in data {
        builder.push_record(row.fields().into_iter().map(|c| c.to_string()));
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
