use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{extract_unique_values, filter_rows, resolve_column, ProfessionMatcher};
use crate::models::{
    ColumnOptionsRequest, ColumnOptionsResponse, ErrorResponse, FilterPostingsRequest,
    FilterPostingsResponse, HealthResponse, MatchRequest, MatchResponse, PostingTable,
    SheetPayload, TableError, TaxonomyResponse,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<ProfessionMatcher>,
    pub matching: Arc<MatchingSettings>,
}

impl AppState {
    pub fn new(matcher: ProfessionMatcher, matching: MatchingSettings) -> Self {
        Self {
            matcher: Arc::new(matcher),
            matching: Arc::new(matching),
        }
    }

    fn load_table(&self, sheet: SheetPayload) -> Result<PostingTable, HttpResponse> {
        let row_count = sheet.row_count();
        if row_count > self.matching.max_rows {
            tracing::info!("Rejecting sheet with {} rows (max {})", row_count, self.matching.max_rows);
            return Err(HttpResponse::PayloadTooLarge().json(ErrorResponse {
                error: "too_many_rows".to_string(),
                message: format!("The sheet has {} rows, at most {} are supported", row_count, self.matching.max_rows),
                status_code: 413,
            }));
        }

        sheet
            .into_table(&self.matching.header_keywords, self.matching.header_scan_rows)
            .map_err(table_error_response)
    }

    fn column_for(&self, table: &PostingTable, requested: Option<&str>) -> Result<String, HttpResponse> {
        resolve_column(table, requested, &self.matching.major_column_keywords)
            .map_err(table_error_response)
    }
}

/// Table problems are the user's to fix by re-uploading or choosing a column
fn table_error_response(err: TableError) -> HttpResponse {
    tracing::info!("Rejecting sheet: {}", err);
    let error = match err {
        TableError::EmptySheet => "empty_sheet",
        TableError::HeaderNotFound(_) => "header_not_found",
        TableError::UnknownColumn(_) => "unknown_column",
        TableError::MajorColumnNotDetected => "major_column_not_detected",
    };

    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: 422,
    })
}

fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Configure all posting-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/taxonomy", web::get().to(get_taxonomy))
        .route("/match", web::post().to(match_requirement))
        .route("/postings/filter", web::post().to(filter_postings))
        .route("/postings/options", web::post().to(column_options));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Taxonomy in use, categories in their configured order
///
/// GET /api/v1/taxonomy
async fn get_taxonomy(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(TaxonomyResponse {
        categories: state.matcher.taxonomy().categories().to_vec(),
    })
}

/// Match a single requirement text against a query
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// { "requirement": "新闻传播学类", "query": "新闻学" }
/// ```
async fn match_requirement(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let matched = state.matcher.matches(&req.requirement, &req.query);
    tracing::debug!("match requirement={:?} query={:?} -> {}", req.requirement, req.query, matched);

    HttpResponse::Ok().json(MatchResponse { matched })
}

/// Filter a posting sheet by major query
///
/// POST /api/v1/postings/filter
///
/// Request body (either `records`, or `headers` + `rows`):
/// ```json
/// {
///   "records": [["职位", "专业"], ["记者", "新闻传播学类"]],
///   "column": "专业",
///   "query": "新闻学"
/// }
/// ```
async fn filter_postings(
    state: web::Data<AppState>,
    req: web::Json<FilterPostingsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let FilterPostingsRequest { sheet, column, query } = req.into_inner();

    let table = match state.load_table(sheet) {
        Ok(table) => table,
        Err(response) => return response,
    };
    let column = match state.column_for(&table, column.as_deref()) {
        Ok(column) => column,
        Err(response) => return response,
    };

    let outcome = filter_rows(&table, &column, &query, &state.matcher);

    tracing::info!(
        "Filtered {} of {} postings on column {:?} for query {:?}",
        outcome.matched,
        outcome.total,
        column,
        query
    );

    HttpResponse::Ok().json(FilterPostingsResponse {
        rows: outcome.rows.into_iter().cloned().collect(),
        total_rows: outcome.total,
        matched_rows: outcome.matched,
        column,
    })
}

/// Distinct values of a column, for the filter drop-down
///
/// POST /api/v1/postings/options
async fn column_options(
    state: web::Data<AppState>,
    req: web::Json<ColumnOptionsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let ColumnOptionsRequest { sheet, column } = req.into_inner();

    let table = match state.load_table(sheet) {
        Ok(table) => table,
        Err(response) => return response,
    };
    let column = match state.column_for(&table, column.as_deref()) {
        Ok(column) => column,
        Err(response) => return response,
    };

    let values = extract_unique_values(&table.rows, &column);
    tracing::debug!("Column {:?} has {} distinct values", column, values.len());

    HttpResponse::Ok().json(ColumnOptionsResponse { column, values })
}
