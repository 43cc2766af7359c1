use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Identifier exactly as the OCS sent it.
///
/// Most tenants use numeric ids, some use text. The value is echoed back in
/// follow-up request bodies and report cells without conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OcsId {
    Number(Number),
    Text(String),
}

impl OcsId {
    /// `None` for null, arrays and objects
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(OcsId::Number(n.clone())),
            Value::String(s) => Some(OcsId::Text(s.clone())),
            Value::Bool(b) => Some(OcsId::Text(b.to_string())),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            OcsId::Number(n) => Value::Number(n.clone()),
            OcsId::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<i64> for OcsId {
    fn from(id: i64) -> Self {
        OcsId::Number(id.into())
    }
}

impl From<&str> for OcsId {
    fn from(id: &str) -> Self {
        OcsId::Text(id.to_string())
    }
}

impl fmt::Display for OcsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcsId::Number(n) => write!(f, "{}", n),
            OcsId::Text(s) => f.write_str(s),
        }
    }
}
