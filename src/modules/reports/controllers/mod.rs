mod report_controller;

pub use report_controller::{MalformedReportResponse, ReportResponse};

/// Configure report routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    report_controller::configure(cfg);
}
