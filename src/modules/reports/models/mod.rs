pub mod report_request;
pub mod report_row;
pub mod report_table;
pub mod weekly_figure;

pub use report_request::{
    resolve_account_id, GeneratedReport, ReportOutcome, ReportQuery, ReportRequest,
};
pub use report_row::{columns, ReportRow, RowRecord};
pub use report_table::ReportTable;
pub use weekly_figure::WeeklyFigure;
