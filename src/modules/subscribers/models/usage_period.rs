use rust_decimal::Decimal;
use serde_json::Value;

use super::fields::{as_decimal_lenient, as_quantity, first_present, lookup};

const RECORD_LIST_KEYS: &[&str] = &["usages", "usage"];
const QUANTITY_KEYS: &[&str] = &["quantity", "usedDataByte", "useddatabyte"];

/// Usage and cost totals for one subscriber over one period
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsagePeriod {
    /// Sum of record quantities
    pub used_bytes: f64,
    pub reseller_cost: Decimal,
    pub subscriber_cost: Decimal,
    pub record_count: usize,
}

impl UsagePeriod {
    /// Decode a `subscriberUsageOverPeriod` response.
    ///
    /// Never fails: a response without the expected shape decodes to zeros.
    pub fn from_response(response: &Value) -> Self {
        let period = response
            .get("subscriberUsageOverPeriod")
            .unwrap_or(&Value::Null);

        let records = first_present(period, RECORD_LIST_KEYS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let used_bytes = records
            .iter()
            .map(|record| as_quantity(first_present(record, QUANTITY_KEYS)))
            .sum();

        let total_cost = |key: &str| {
            lookup(period, &["total", key])
                .and_then(as_decimal_lenient)
                .unwrap_or(Decimal::ZERO)
        };

        Self {
            used_bytes,
            reseller_cost: total_cost("resellerCost"),
            subscriber_cost: total_cost("subscriberCost"),
            record_count: records.len(),
        }
    }
}
