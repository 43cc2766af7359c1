use chrono::NaiveDate;

use super::env_or;
use crate::core::{parse_iso_date, AppError, Result};

pub const DEFAULT_ACCOUNT_ID: i64 = 3771;
pub const DEFAULT_START_DATE: &str = "2025-06-01";
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Fallbacks and limits for report generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Account used when a request omits `accountId` or sends zero
    pub default_account_id: i64,
    /// Start date used when a request omits `startDate`
    pub default_start_date: NaiveDate,
    /// Subscribers enriched concurrently
    pub max_concurrent: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_account_id: DEFAULT_ACCOUNT_ID,
            default_start_date: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap_or(NaiveDate::MIN),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

impl ReportSettings {
    pub fn from_env() -> Result<Self> {
        let start = env_or(
            "REPORT_DEFAULT_START_DATE",
            DEFAULT_START_DATE.to_string(),
        )?;

        Ok(ReportSettings {
            default_account_id: env_or("REPORT_DEFAULT_ACCOUNT_ID", DEFAULT_ACCOUNT_ID)?,
            default_start_date: parse_iso_date(&start)
                .map_err(|_| AppError::configuration("Invalid REPORT_DEFAULT_START_DATE"))?,
            max_concurrent: env_or("REPORT_MAX_CONCURRENT", DEFAULT_MAX_CONCURRENT)?,
        })
    }
}
