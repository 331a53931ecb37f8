//! Pipe-table extraction from the raw feed document.
//!
//! The feed is a README with prose, badges, and one markdown table of
//! postings. Parsing is line-oriented and never fails: lines that do not
//! look like table rows are skipped.

use careersignal_core::Record;

use crate::link::extract_link;

/// Substring that marks the table header row.
const HEADER_MARKER: &str = "| Company |";

/// Substring that marks the header/body divider row.
const SEPARATOR_MARKER: &str = "----";

/// Minimum split width: a leading empty column plus five data columns.
const MIN_COLUMNS: usize = 6;

/// Parses every posting row out of `document`, in document order.
///
/// Table mode starts at the first line containing `"| Company |"` and lasts
/// for the rest of the document. Within it, only lines starting with `|`
/// are considered; divider rows and rows with fewer than six `|`-separated
/// columns are dropped. A document with no header yields an empty vector.
#[must_use]
pub fn parse_snapshot(document: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut in_table = false;

    for line in document.lines() {
        if !in_table {
            in_table = line.contains(HEADER_MARKER);
            continue;
        }

        if !line.starts_with('|') || is_divider(line) {
            continue;
        }

        if let Some(record) = parse_row(line) {
            records.push(record);
        }
    }

    tracing::debug!(count = records.len(), "parse: extracted records");
    records
}

/// Divider rows contain `----`, or are made only of `-`/`:` cells such as
/// `|---|:---:|`. A short `|---|` divider would otherwise pass the column
/// check and surface as a posting named `---`.
fn is_divider(line: &str) -> bool {
    if line.contains(SEPARATOR_MARKER) {
        return true;
    }

    let mut cells = line.split('|').map(str::trim).filter(|c| !c.is_empty());
    let mut saw_cell = false;
    let all_dashes = cells.all(|cell| {
        saw_cell = true;
        cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':')
    });
    saw_cell && all_dashes
}

fn parse_row(line: &str) -> Option<Record> {
    let columns: Vec<&str> = line.split('|').map(str::trim).collect();
    if columns.len() < MIN_COLUMNS {
        return None;
    }

    Some(Record {
        company: columns[1].to_owned(),
        role: columns[2].to_owned(),
        location: columns[3].to_owned(),
        link: extract_link(columns[4]).unwrap_or_default(),
        date_posted: columns[5].to_owned(),
    })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
