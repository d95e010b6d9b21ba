//! Spreadsheet layouts exchanged with the browser-side workbook library.
//!
//! Parsing and writing `.xlsx` happen in the browser; the Rust side only
//! deals with rows of strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rows of the first worksheet, header rows included.
pub type SheetRows = Vec<Vec<String>>;

/// A workbook with one worksheet, ready to be written and downloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetExport {
    pub file_name: String,
    pub sheet_name: String,
    /// All rows, header rows first.
    pub rows: SheetRows,
    /// Column widths in characters; empty means library defaults.
    #[serde(default)]
    pub column_widths: Vec<u16>,
}

impl SheetExport {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    pub fn data_row_count(&self, header_rows: usize) -> usize {
        self.rows.len().saturating_sub(header_rows)
    }
}

/// Cell `idx` of a row, trimmed; missing cells read as empty.
pub fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}

/// Exact comparison of a header row against its expected constant.
///
/// Cells missing at the end of the row count as empty, so a trailing blank
/// label matches; any extra non-empty cell is a mismatch.
pub fn header_row_matches(row: &[String], expected: &[&str]) -> bool {
    if row.len() > expected.len() && row[expected.len()..].iter().any(|c| !c.is_empty()) {
        return false;
    }
    expected
        .iter()
        .enumerate()
        .all(|(idx, want)| row.get(idx).map(String::as_str).unwrap_or("") == *want)
}

/// Timestamp fragment used in export file names: `2024-03-15T14-02-26` (UTC).
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Convert string constants into an owned row.
pub fn owned_row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_header_row_matches() {
        let expected = ["A", "B", ""];
        assert!(header_row_matches(&owned_row(&["A", "B", ""]), &expected));
        assert!(header_row_matches(&owned_row(&["A", "B"]), &expected));
        assert!(header_row_matches(&owned_row(&["A", "B", "", ""]), &expected));
        assert!(!header_row_matches(&owned_row(&["A", "B", "", "X"]), &expected));
        assert!(!header_row_matches(&owned_row(&["A", "b", ""]), &expected));
        assert!(!header_row_matches(&owned_row(&["A ", "B", ""]), &expected));
        assert!(!header_row_matches(&owned_row(&["A"]), &["A", "B"]));
    }

    #[test]
    fn test_cell() {
        let row = owned_row(&[" x ", "y"]);
        assert_eq!(cell(&row, 0), "x");
        assert_eq!(cell(&row, 5), "");
    }

    #[test]
    fn test_file_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(file_timestamp(now), "2024-03-15T14-02-26");
    }
}
