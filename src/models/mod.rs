// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{locate_header_row, PostingRow, PostingTable, TableError};
pub use requests::{ColumnOptionsRequest, FilterPostingsRequest, MatchRequest, SheetPayload};
pub use responses::{ColumnOptionsResponse, ErrorResponse, FilterPostingsResponse, HealthResponse, MatchResponse, TaxonomyResponse};
