//! Lenient field lookups over untyped OCS JSON.
//!
//! The OCS API is inconsistent about naming (`resellercost` vs `resellerCost`)
//! and about scalar types (numbers sometimes arrive as strings). Every decode
//! in this module tree goes through these helpers so that alias order and
//! coercion rules live in one place.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// First non-null value among `keys`, tried in order
pub fn first_present<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| obj.get(*key).filter(|value| !value.is_null()))
}

/// Follow a path of object keys; `None` when any step is missing or the leaf is null
pub fn lookup<'a>(obj: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(obj, |current, key| current.get(*key))
        .filter(|value| !value.is_null())
}

/// Integer from a JSON number or numeric string; integral floats are accepted
pub fn as_i64_lenient(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    }
}

fn integral_f64(v: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    (v.is_finite() && v.fract() == 0.0 && v.abs() <= LIMIT).then_some(v as i64)
}

/// Decimal from a JSON number or numeric string, without binary float noise
pub fn as_decimal_lenient(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Numeric package field: a decimal when the value parses, otherwise the
/// value exactly as sent (`"N/A"`, `"unlimited"`, ...)
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(Decimal),
    Raw(Value),
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Number(value)
    }
}

/// `None` only for an absent value; anything present is kept in some form
pub fn as_amount(value: &Value) -> Option<Amount> {
    match value {
        Value::Null => None,
        other => Some(
            as_decimal_lenient(other)
                .map(Amount::Number)
                .unwrap_or_else(|| Amount::Raw(other.clone())),
        ),
    }
}

/// Display text for strings, numbers and booleans
pub fn as_text_lenient(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Usage quantity; anything missing or non-numeric counts as zero
pub fn as_quantity(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => Some(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}
