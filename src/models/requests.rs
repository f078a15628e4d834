use crate::models::domain::{PostingRow, PostingTable, TableError};
use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Sheet payload as produced by the spreadsheet front end
///
/// Either raw `records` (header row included, possibly preceded by title
/// rows) or an already split `headers` + `rows` pair, where each row is a
/// plain object of header to cell. Row ids are assigned by position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetPayload {
    #[serde(default)]
    pub records: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    pub headers: Option<Vec<String>>,
    #[serde(default)]
    pub rows: Option<Vec<HashMap<String, Value>>>,
}

impl SheetPayload {
    /// Assemble a posting table, scanning for the header row in raw records
    pub fn into_table(
        self,
        header_keywords: &[String],
        header_scan_rows: usize,
    ) -> Result<PostingTable, TableError> {
        match (self.records, self.headers, self.rows) {
            (Some(records), _, _) => {
                PostingTable::from_records_with_header_scan(&records, header_keywords, header_scan_rows)
                    .or_else(|e| match e {
                        // No recognizable header: fall back to the first record
                        TableError::HeaderNotFound(_) => PostingTable::from_records(&records),
                        other => Err(other),
                    })
            }
            (None, Some(headers), rows) => Ok(PostingTable {
                headers,
                rows: rows
                    .unwrap_or_default()
                    .into_iter()
                    .enumerate()
                    .map(|(index, cells)| PostingRow::new(index, cells))
                    .collect(),
            }),
            (None, None, _) => Err(TableError::EmptySheet),
        }
    }

    pub fn row_count(&self) -> usize {
        match (&self.records, &self.rows) {
            (Some(records), _) => records.len().saturating_sub(1),
            (None, Some(rows)) => rows.len(),
            (None, None) => 0,
        }
    }
}

fn validate_sheet(sheet: &SheetPayload) -> Result<(), ValidationError> {
    if sheet.records.is_none() && sheet.headers.is_none() {
        return Err(ValidationError::new("sheet_missing"));
    }
    Ok(())
}

/// Request to match one requirement text against a query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(default)]
    #[validate(length(max = 4096))]
    pub requirement: String,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub query: String,
}

/// Request to filter a posting sheet by a major query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FilterPostingsRequest {
    #[serde(flatten)]
    #[validate(custom(function = "validate_sheet"))]
    pub sheet: SheetPayload,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub column: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub query: String,
}

/// Request for the distinct values of a column (filter drop-down options)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ColumnOptionsRequest {
    #[serde(flatten)]
    #[validate(custom(function = "validate_sheet"))]
    pub sheet: SheetPayload,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub column: Option<String>,
}
