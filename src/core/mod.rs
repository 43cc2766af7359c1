pub mod calendar;
pub mod concurrency;
pub mod error;
pub mod request;

pub use calendar::{parse_iso_date, partition_weeks, WeekInterval};
pub use concurrency::run_bounded;
pub use error::{AppError, Result};
