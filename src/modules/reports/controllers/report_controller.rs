use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;

use crate::core::request::parse_optional_json;
use crate::core::{AppError, Result, WeekInterval};
use crate::modules::reports::models::{
    GeneratedReport, ReportOutcome, ReportQuery, ReportRequest, RowRecord,
};
use crate::modules::reports::services::ReportService;

/// Successful report response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub rows: Vec<RowRecord>,
    pub columns: Vec<String>,
    pub count: usize,
    pub weeks: Vec<WeekInterval>,
    pub account_id: i64,
}

/// Response when the remote subscriber list was not an array
#[derive(Debug, Serialize)]
pub struct MalformedReportResponse {
    pub rows: Vec<RowRecord>,
    pub columns: Vec<String>,
    pub note: Value,
}

impl From<GeneratedReport> for ReportResponse {
    fn from(report: GeneratedReport) -> Self {
        Self {
            count: report.table.len(),
            rows: report.table.rows,
            columns: report.table.columns,
            weeks: report.weeks,
            account_id: report.account_id,
        }
    }
}

/// POST /api/ocs/report
///
/// Body `{ accountId?, startDate?, endDate? }`; an empty body uses all defaults.
pub async fn post_report(
    service: web::Data<ReportService>,
    body: web::Bytes,
) -> std::result::Result<HttpResponse, AppError> {
    let query: ReportQuery = parse_optional_json(&body)?;
    handle_report(&service, query).await
}

/// GET /api/ocs/report?accountId=&startDate=&endDate=
pub async fn get_report(
    service: web::Data<ReportService>,
    query: web::Query<ReportQuery>,
) -> std::result::Result<HttpResponse, AppError> {
    handle_report(&service, query.into_inner()).await
}

async fn handle_report(service: &ReportService, query: ReportQuery) -> Result<HttpResponse> {
    let today = chrono::Utc::now().date_naive();
    let request = ReportRequest::resolve(&query, service.settings(), today)?;

    let response = match service.generate_report(&request).await? {
        ReportOutcome::Generated(report) => HttpResponse::Ok().json(ReportResponse::from(report)),
        ReportOutcome::MalformedSubscriberList { note } => {
            HttpResponse::Ok().json(MalformedReportResponse {
                rows: Vec::new(),
                columns: Vec::new(),
                note,
            })
        }
    };

    Ok(response)
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/ocs/report")
            .route(web::post().to(post_report))
            .route(web::get().to(get_report)),
    );
}
