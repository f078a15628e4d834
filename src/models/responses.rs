use serde::{Deserialize, Serialize};
use crate::core::taxonomy::Category;
use crate::models::domain::PostingRow;

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matched: bool,
}

/// Response for the filter postings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterPostingsResponse {
    pub column: String,
    pub rows: Vec<PostingRow>,
    #[serde(rename = "totalRows")]
    pub total_rows: usize,
    #[serde(rename = "matchedRows")]
    pub matched_rows: usize,
}

/// Response for the column options endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnOptionsResponse {
    pub column: String,
    pub values: Vec<String>,
}

/// Taxonomy listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyResponse {
    pub categories: Vec<Category>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
