use crate::core::matcher::ProfessionMatcher;
use crate::models::{PostingRow, PostingTable, TableError};
use std::collections::BTreeSet;

/// Result of filtering a posting table by a query
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    pub rows: Vec<&'a PostingRow>,
    pub total: usize,
    pub matched: usize,
}

/// Find the first header that names the major requirement column
#[inline]
pub fn detect_major_column<'a>(headers: &'a [String], keywords: &[String]) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| keywords.iter().any(|k| h.contains(k.as_str())))
        .map(String::as_str)
}

/// Resolve the column to filter on: an explicit choice must exist in the
/// table, otherwise it is detected from the headers
pub fn resolve_column(
    table: &PostingTable,
    requested: Option<&str>,
    keywords: &[String],
) -> Result<String, TableError> {
    match requested.map(str::trim).filter(|c| !c.is_empty()) {
        Some(column) if table.has_column(column) => Ok(column.to_string()),
        Some(column) => Err(TableError::UnknownColumn(column.to_string())),
        None => detect_major_column(&table.headers, keywords)
            .map(str::to_string)
            .ok_or(TableError::MajorColumnNotDetected),
    }
}

/// Keep the rows whose `column` cell matches `query`
pub fn filter_rows<'a>(
    table: &'a PostingTable,
    column: &str,
    query: &str,
    matcher: &ProfessionMatcher,
) -> FilterOutcome<'a> {
    let rows: Vec<&PostingRow> = table
        .rows
        .iter()
        .filter(|row| matcher.matches_cell(row.get(column), query))
        .collect();

    FilterOutcome {
        matched: rows.len(),
        total: table.rows.len(),
        rows,
    }
}

/// Distinct non-blank string values of a column, trimmed and sorted
pub fn extract_unique_values(rows: &[PostingRow], column: &str) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.text(column))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
