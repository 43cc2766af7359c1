use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Number, Value};

use crate::modules::subscribers::UsagePeriod;

/// Usage and cost attributed to one subscriber for one week
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeeklyFigure {
    Available {
        used_bytes: f64,
        reseller_cost: Decimal,
        subscriber_cost: Decimal,
    },
    /// The remote call for this week failed. Rendered as empty strings so it
    /// stays distinguishable from a known zero.
    Unavailable,
}

impl WeeklyFigure {
    /// Cells in column order: used data, reseller cost, subscriber cost
    pub fn cells(&self) -> [Value; 3] {
        match self {
            WeeklyFigure::Available {
                used_bytes,
                reseller_cost,
                subscriber_cost,
            } => [
                number_cell(*used_bytes),
                decimal_cell(*reseller_cost),
                decimal_cell(*subscriber_cost),
            ],
            WeeklyFigure::Unavailable => [empty_cell(), empty_cell(), empty_cell()],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, WeeklyFigure::Available { .. })
    }
}

impl From<UsagePeriod> for WeeklyFigure {
    fn from(usage: UsagePeriod) -> Self {
        WeeklyFigure::Available {
            used_bytes: usage.used_bytes,
            reseller_cost: usage.reseller_cost,
            subscriber_cost: usage.subscriber_cost,
        }
    }
}

pub fn empty_cell() -> Value {
    Value::String(String::new())
}

/// Whole numbers render as JSON integers, everything else as floats
pub fn number_cell(value: f64) -> Value {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.fract() == 0.0 && value.abs() <= LIMIT {
        return Value::from(value as i64);
    }
    Number::from_f64(value).map(Value::Number).unwrap_or_else(empty_cell)
}

pub fn decimal_cell(value: Decimal) -> Value {
    let value = value.normalize();
    if value.scale() == 0 {
        if let Some(whole) = value.to_i64() {
            return Value::from(whole);
        }
    }
    value.to_f64().map(number_cell).unwrap_or_else(empty_cell)
}
