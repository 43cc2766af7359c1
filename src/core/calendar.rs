//! Calendar week partitioning for report date ranges.
//!
//! Report ranges are split into closed seven-day windows anchored on the
//! requested start date (not on a fixed weekday). All arithmetic is done on
//! plain calendar dates, so the result is the same in every server timezone.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};

use crate::core::{AppError, Result};

/// Wire format for report dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const WINDOW_SPAN: Days = Days::new(6);
const WINDOW_STRIDE: Days = Days::new(7);

/// A closed date window `[start_date, end_date]` of at most seven days
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekInterval {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WeekInterval {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Both ends as `YYYY-MM-DD`
    pub fn iso_bounds(&self) -> (String, String) {
        (
            self.start_date.format(ISO_DATE_FORMAT).to_string(),
            self.end_date.format(ISO_DATE_FORMAT).to_string(),
        )
    }

    /// Column suffix for this window, e.g. `2025-06-01_to_2025-06-07`
    pub fn label(&self) -> String {
        let (start, end) = self.iso_bounds();
        format!("{}_to_{}", start, end)
    }

    /// Number of calendar days covered, both ends inclusive
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl fmt::Display for WeekInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start_date.format(ISO_DATE_FORMAT),
            self.end_date.format(ISO_DATE_FORMAT)
        )
    }
}

/// Serialized as `["YYYY-MM-DD", "YYYY-MM-DD"]`
impl Serialize for WeekInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.iso_bounds().serialize(serializer)
    }
}

/// Split `[start, end]` into contiguous seven-day windows.
///
/// The cursor advances exactly seven days from each window start; the last
/// window is truncated to `end`. Returns an empty vector when `start > end`.
pub fn partition_weeks(start: NaiveDate, end: NaiveDate) -> Vec<WeekInterval> {
    let mut weeks = Vec::new();
    let mut cursor = start;

    while cursor <= end {
        let window_end = cursor
            .checked_add_days(WINDOW_SPAN)
            .map_or(end, |candidate| candidate.min(end));
        weeks.push(WeekInterval::new(cursor, window_end));

        match cursor.checked_add_days(WINDOW_STRIDE) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    weeks
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| {
        AppError::validation(format!(
            "Invalid date '{}'. Expected YYYY-MM-DD",
            value
        ))
    })
}
