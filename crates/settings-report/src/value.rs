//! Typed view of a setting's `value` field.

use serde_json::{Map, Number, Value};
use std::fmt;

/// The `value` field of a settings resource.
///
/// Kept typed until a line is rendered so numbers, booleans and nulls are
/// not forced through a string conversion at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
    /// Arrays and objects, rendered as compact JSON.
    Structured(Value),
    /// The resource carried no `value` key.
    Absent,
}

impl SettingValue {
    /// Decode a settings resource body and extract its `value` field.
    ///
    /// The body must be a JSON object or `null`; every key other than
    /// `value` is ignored. A `null` body carries no value.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let resource: Option<Map<String, Value>> = serde_json::from_slice(body)?;
        Ok(resource
            .and_then(|mut resource| resource.remove("value"))
            .map(SettingValue::from)
            .unwrap_or(SettingValue::Absent))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SettingValue::Absent)
    }
}

impl From<Value> for SettingValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => SettingValue::String(s),
            Value::Number(n) => SettingValue::Number(n),
            Value::Bool(b) => SettingValue::Bool(b),
            Value::Null => SettingValue::Null,
            other @ (Value::Array(_) | Value::Object(_)) => SettingValue::Structured(other),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::String(s) => f.write_str(s),
            SettingValue::Number(n) => write!(f, "{n}"),
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Null => f.write_str("null"),
            SettingValue::Structured(v) => write!(f, "{v}"),
            SettingValue::Absent => f.write_str("<no value>"),
        }
    }
}
