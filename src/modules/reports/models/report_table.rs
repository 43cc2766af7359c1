use serde::Serialize;
use serde_json::Value;

use super::report_row::RowRecord;

/// Rectangular report: rows plus the ordered union of their columns.
///
/// Rows are not padded; a column missing from a row reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTable {
    pub rows: Vec<RowRecord>,
    pub columns: Vec<String>,
}

impl ReportTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup; `None` for an out-of-range row or a column the row lacks
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|record| record.get(column))
    }
}
