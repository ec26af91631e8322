//! Records and value formatting
//!
//! A record is an ordered JSON object. The first record of a data set
//! defines the column set; later records are read against it.

use chrono::DateTime;
use serde_json::{Map, Value};

/// One data row: column name to value, in insertion order
pub type Record = Map<String, Value>;

/// Placeholder shown by the detail view for missing or null values
pub const MISSING_VALUE: &str = "N/A";

/// Column keys taken from the first record
pub fn columns(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}

/// Single-line cell text
///
/// Objects and arrays use compact JSON, null and absent values are empty.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other @ (Value::Object(_) | Value::Array(_))) => {
            serde_json::to_string(other).unwrap_or_default()
        }
        Some(other) => other.to_string(),
    }
}

/// Human-formatted value for the detail view
///
/// Objects and arrays are pretty-printed, timestamps are shown in local
/// wall-clock form and null becomes [`MISSING_VALUE`].
pub fn detail_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::String(s)) => format_timestamp(s).unwrap_or_else(|| s.clone()),
        Some(other @ (Value::Object(_) | Value::Array(_))) => serde_json::to_string_pretty(other)
            .unwrap_or_else(|_| MISSING_VALUE.to_string()),
        Some(other) => other.to_string(),
    }
}

/// Whether the detail view should show the value as a code block
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn format_timestamp(s: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S %:z").to_string())
}
