use std::collections::HashSet;

use crate::modules::reports::models::{columns, ReportTable, RowRecord};

/// Build the table for a set of rows with possibly different key sets.
///
/// Column order:
/// 1. the base columns, always, in their fixed order
/// 2. any other non-weekly column, in first-seen order
/// 3. weekly columns, sorted lexicographically (chronological, since the
///    embedded dates are zero-padded ISO)
pub fn normalize(rows: Vec<RowRecord>) -> ReportTable {
    let mut seen: HashSet<&str> = columns::BASE.iter().copied().collect();
    let mut others: Vec<String> = Vec::new();
    let mut weekly: Vec<String> = Vec::new();

    for key in rows.iter().flat_map(|row| row.keys()) {
        if !seen.insert(key.as_str()) {
            continue;
        }
        if columns::is_weekly(key) {
            weekly.push(key.clone());
        } else {
            others.push(key.clone());
        }
    }
    weekly.sort_unstable();

    let columns = columns::BASE
        .iter()
        .map(|column| column.to_string())
        .chain(others)
        .chain(weekly)
        .collect();

    ReportTable { rows, columns }
}
