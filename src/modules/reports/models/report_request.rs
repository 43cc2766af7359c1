use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ReportSettings;
use crate::core::{parse_iso_date, Result, WeekInterval};
use crate::modules::subscribers::models::fields::as_i64_lenient;

use super::ReportTable;

/// Inbound report parameters, as sent in a JSON body or a query string.
/// Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    /// Number or numeric string
    #[serde(rename = "accountId", default)]
    pub account_id: Option<Value>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
}

/// Report parameters after defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub account_id: i64,
    /// Inclusive
    pub start_date: NaiveDate,
    /// Inclusive
    pub end_date: NaiveDate,
}

impl ReportRequest {
    /// Apply defaults: missing, zero or non-numeric account falls back to the
    /// configured account; blank start/end fall back to the configured start
    /// date and `today`.
    pub fn resolve(query: &ReportQuery, settings: &ReportSettings, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            account_id: resolve_account_id(query.account_id.as_ref(), settings.default_account_id),
            start_date: resolve_date(query.start_date.as_deref())?
                .unwrap_or(settings.default_start_date),
            end_date: resolve_date(query.end_date.as_deref())?.unwrap_or(today),
        })
    }
}

/// Account id from loosely typed input, or `default`
pub fn resolve_account_id(value: Option<&Value>, default: i64) -> i64 {
    value
        .and_then(as_i64_lenient)
        .filter(|id| *id != 0)
        .unwrap_or(default)
}

fn resolve_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_iso_date(text).map(Some),
    }
}

/// Result of a report run
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Generated(GeneratedReport),
    /// The subscriber list came back in an unexpected shape; `note` carries
    /// the raw remote response for diagnosis
    MalformedSubscriberList { note: Value },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub account_id: i64,
    pub weeks: Vec<WeekInterval>,
    pub table: ReportTable,
}
