use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::weekly_figure::{decimal_cell, empty_cell, WeeklyFigure};
use crate::core::WeekInterval;
use crate::modules::gateways::OcsId;
use crate::modules::subscribers::models::Amount;
use crate::modules::subscribers::PrepaidPackage;

/// Flattened row as sent to clients: column name to cell
pub type RowRecord = Map<String, Value>;

/// Output column names
pub mod columns {
    pub const SUBSCRIBER_ID: &str = "subscriberId";
    pub const ICCID: &str = "iccid";
    pub const LAST_USAGE_DATE: &str = "lastUsageDate";
    pub const PACKAGE_ID: &str = "subscriberPrepaidPackageId";
    pub const TEMPLATE_ID: &str = "prepaidPackageTemplateId";
    pub const TEMPLATE_NAME: &str = "templateName";
    pub const SUBSCRIBER_COST: &str = "subscriberCost";
    pub const RESELLER_COST: &str = "resellerCost";
    pub const USED_DATA_BYTE: &str = "usedDataByte";
    pub const PACKAGE_DATA_BYTE: &str = "pckDataByte";
    pub const ACTIVATION_DATE: &str = "activationDate";
    pub const EXPIRY_DATE: &str = "expiryDate";

    /// Always-first columns, in display order
    pub const BASE: [&str; 12] = [
        SUBSCRIBER_ID,
        ICCID,
        LAST_USAGE_DATE,
        PACKAGE_ID,
        TEMPLATE_ID,
        TEMPLATE_NAME,
        SUBSCRIBER_COST,
        RESELLER_COST,
        USED_DATA_BYTE,
        PACKAGE_DATA_BYTE,
        ACTIVATION_DATE,
        EXPIRY_DATE,
    ];

    pub const USED_DATA_PREFIX: &str = "usedData_";
    pub const RESELLER_COST_PREFIX: &str = "resellerCost_";
    pub const SUBSCRIBER_COST_PREFIX: &str = "subscriberCost_";

    /// Per-week figure columns, in the order they appear within a week
    pub const WEEKLY_PREFIXES: [&str; 3] =
        [USED_DATA_PREFIX, RESELLER_COST_PREFIX, SUBSCRIBER_COST_PREFIX];

    pub fn is_weekly(column: &str) -> bool {
        WEEKLY_PREFIXES
            .iter()
            .any(|prefix| column.starts_with(prefix))
    }
}

/// One report line: a subscriber, optionally one of its packages, and the
/// subscriber's weekly figures
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub subscriber_id: Option<OcsId>,
    pub iccid: Option<String>,
    pub last_usage_date: Option<String>,
    /// `None` for a subscriber without packages
    pub package: Option<PrepaidPackage>,
    pub weekly: BTreeMap<WeekInterval, WeeklyFigure>,
}

impl ReportRow {
    /// Flatten into named cells. Absent values become empty strings so every
    /// base column is present; ids and unparseable amounts keep the value the
    /// OCS sent.
    pub fn to_record(&self) -> RowRecord {
        let mut record = RowRecord::new();
        let package = self.package.as_ref();

        record.insert(columns::SUBSCRIBER_ID.into(), id_cell(self.subscriber_id.as_ref()));
        record.insert(columns::ICCID.into(), text_cell(self.iccid.as_deref()));
        record.insert(
            columns::LAST_USAGE_DATE.into(),
            text_cell(self.last_usage_date.as_deref()),
        );
        record.insert(
            columns::PACKAGE_ID.into(),
            id_cell(package.and_then(|p| p.package_id.as_ref())),
        );
        record.insert(
            columns::TEMPLATE_ID.into(),
            id_cell(package.and_then(|p| p.template_id.as_ref())),
        );
        record.insert(
            columns::TEMPLATE_NAME.into(),
            text_cell(package.and_then(|p| p.template_name.as_deref())),
        );
        record.insert(
            columns::SUBSCRIBER_COST.into(),
            amount_cell(package.and_then(|p| p.subscriber_cost.as_ref())),
        );
        record.insert(
            columns::RESELLER_COST.into(),
            amount_cell(package.and_then(|p| p.reseller_cost.as_ref())),
        );
        record.insert(
            columns::USED_DATA_BYTE.into(),
            amount_cell(package.and_then(|p| p.used_bytes.as_ref())),
        );
        record.insert(
            columns::PACKAGE_DATA_BYTE.into(),
            amount_cell(package.and_then(|p| p.capacity_bytes.as_ref())),
        );
        record.insert(
            columns::ACTIVATION_DATE.into(),
            text_cell(package.and_then(|p| p.activation_date.as_deref())),
        );
        record.insert(
            columns::EXPIRY_DATE.into(),
            text_cell(package.and_then(|p| p.expiry_date.as_deref())),
        );

        for (week, figure) in &self.weekly {
            let label = week.label();
            for (prefix, cell) in columns::WEEKLY_PREFIXES.iter().zip(figure.cells()) {
                record.insert(format!("{}{}", prefix, label), cell);
            }
        }

        record
    }
}

fn id_cell(value: Option<&OcsId>) -> Value {
    value.map_or_else(empty_cell, OcsId::to_value)
}

fn amount_cell(value: Option<&Amount>) -> Value {
    match value {
        Some(Amount::Number(number)) => decimal_cell(*number),
        Some(Amount::Raw(raw)) => raw.clone(),
        None => empty_cell(),
    }
}

fn text_cell(value: Option<&str>) -> Value {
    value.map_or_else(empty_cell, Value::from)
}
