pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{ReportOutcome, ReportQuery, ReportRequest, ReportTable};
pub use services::ReportService;
