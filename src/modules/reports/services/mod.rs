pub mod report_service;
pub mod table_normalizer;

pub use report_service::ReportService;
pub use table_normalizer::normalize;
