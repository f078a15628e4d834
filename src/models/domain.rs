use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while turning tabulated sheet data into postings
///
/// All of these are recoverable by the user re-uploading a different sheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("The sheet is empty, please re-upload a file with a header row")]
    EmptySheet,

    #[error("No header row found in the first {0} rows")]
    HeaderNotFound(usize),

    #[error("Column not found: {0}")]
    UnknownColumn(String),

    #[error("Could not detect the major requirement column, please choose one")]
    MajorColumnNotDetected,
}

/// One job posting: a row id plus cell values keyed by header
///
/// Cells are kept under their own key so a sheet column named `id` never
/// collides with the row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingRow {
    pub id: String,
    #[serde(default)]
    pub cells: HashMap<String, Value>,
}

impl PostingRow {
    /// Row at a zero-based data position, id `row-{index}`
    pub fn new(index: usize, cells: HashMap<String, Value>) -> Self {
        Self {
            id: format!("row-{}", index),
            cells,
        }
    }

    pub fn get(&self, header: &str) -> Option<&Value> {
        self.cells.get(header)
    }

    /// Cell text if the cell holds a string
    pub fn text(&self, header: &str) -> Option<&str> {
        self.cells.get(header).and_then(Value::as_str)
    }
}

/// Tabulated posting sheet: ordered headers and ordered rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingTable {
    pub headers: Vec<String>,
    pub rows: Vec<PostingRow>,
}

impl PostingTable {
    /// Build a table from raw records where the first record is the header row
    pub fn from_records(records: &[Vec<Value>]) -> Result<Self, TableError> {
        let (header_record, data) = records.split_first().ok_or(TableError::EmptySheet)?;
        Ok(Self::assemble(header_record, data))
    }

    /// Build a table after skipping title rows above the real header row
    ///
    /// The header row is the first of the leading `max_scan` records that has
    /// a string cell containing any of `keywords`.
    pub fn from_records_with_header_scan(
        records: &[Vec<Value>],
        keywords: &[String],
        max_scan: usize,
    ) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::EmptySheet);
        }

        let header_index = locate_header_row(records, keywords, max_scan)
            .ok_or(TableError::HeaderNotFound(max_scan.min(records.len())))?;

        Ok(Self::assemble(&records[header_index], &records[header_index + 1..]))
    }

    fn assemble(header_record: &[Value], data: &[Vec<Value>]) -> Self {
        let headers: Vec<String> = header_record.iter().map(header_name).collect();

        let rows = data
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let cells = headers
                    .iter()
                    .zip(record.iter())
                    .filter(|(_, value)| !value.is_null())
                    .map(|(header, value)| (header.clone(), value.clone()))
                    .collect();

                PostingRow::new(index, cells)
            })
            .collect();

        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

/// Find the header row among the first `max_scan` records
pub fn locate_header_row(records: &[Vec<Value>], keywords: &[String], max_scan: usize) -> Option<usize> {
    records.iter().take(max_scan).position(|record| {
        record.iter().any(|cell| {
            cell.as_str()
                .map(|text| keywords.iter().any(|k| text.contains(k.as_str())))
                .unwrap_or(false)
        })
    })
}

fn header_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(raw: Value) -> Vec<Vec<Value>> {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_from_records() {
        let records = records(json!([
            ["职位名称", "专业"],
            ["记者", "新闻传播学类"],
            ["程序员"]
        ]));

        let table = PostingTable::from_records(&records).unwrap();
        assert_eq!(table.headers, vec!["职位名称", "专业"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].id, "row-0");
        assert_eq!(table.rows[0].text("专业"), Some("新闻传播学类"));
        assert_eq!(table.rows[1].id, "row-1");
        assert!(table.rows[1].get("专业").is_none());
    }

    #[test]
    fn test_from_records_empty() {
        assert_eq!(PostingTable::from_records(&[]), Err(TableError::EmptySheet));
    }

    #[test]
    fn test_header_only_sheet() {
        let table = PostingTable::from_records(&records(json!([["专业"]]))).unwrap();
        assert!(table.is_empty());
        assert!(table.has_column("专业"));
    }

    #[test]
    fn test_non_string_headers() {
        let table = PostingTable::from_records(&records(json!([[2024, null, "专业"]]))).unwrap();
        assert_eq!(table.headers, vec!["2024", "", "专业"]);
    }

    #[test]
    fn test_header_scan_skips_title_rows() {
        let records = records(json!([
            ["2024年度公务员招录职位表"],
            [],
            ["招录单位", "职位", "专业要求"],
            ["市委宣传部", "科员", "新闻传播学类"]
        ]));
        let keywords = vec!["专业".to_string(), "招录单位".to_string()];

        assert_eq!(locate_header_row(&records, &keywords, 10), Some(2));

        let table = PostingTable::from_records_with_header_scan(&records, &keywords, 10).unwrap();
        assert_eq!(table.headers[2], "专业要求");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].text("专业要求"), Some("新闻传播学类"));
    }

    #[test]
    fn test_id_column_stays_a_cell() {
        let records = records(json!([["id", "专业"], ["A-17", "新闻传播学类"]]));
        let table = PostingTable::from_records(&records).unwrap();
        let row = &table.rows[0];
        assert_eq!(row.id, "row-0");
        assert_eq!(row.text("id"), Some("A-17"));

        let encoded = serde_json::to_value(row).unwrap();
        assert_eq!(encoded["id"], "row-0");
        assert_eq!(encoded["cells"]["id"], "A-17");

        let decoded: PostingRow = serde_json::from_value(encoded).unwrap();
        assert_eq!(&decoded, row);
    }

    #[test]
    fn test_header_scan_not_found() {
        let records = records(json!([["a", "b"], ["c", "d"]]));
        let keywords = vec!["专业".to_string()];
        assert_eq!(
            PostingTable::from_records_with_header_scan(&records, &keywords, 10),
            Err(TableError::HeaderNotFound(2))
        );
    }

    #[test]
    fn test_header_scan_respects_limit() {
        let records = records(json!([["title"], ["title"], ["专业"]]));
        let keywords = vec!["专业".to_string()];
        assert_eq!(locate_header_row(&records, &keywords, 2), None);
    }
}
