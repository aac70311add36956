//! Row-set model - parsed export rows as column-name/value mappings
//!
//! The engine does not read spreadsheets itself. An upstream parser hands
//! over each sheet as a sequence of rows, one JSON-like value per column.
//! Accessors here are tolerant of the usual export quirks: numbers that
//! arrive as strings, padded whitespace, and null cells.

use std::collections::HashMap;

use serde_json::Value;

/// A single parsed export row: column name to cell value
pub type Row = HashMap<String, Value>;

/// Convert a JSON array of objects into rows.
///
/// Non-object entries are skipped. This is the expected handoff shape from
/// a spreadsheet-parsing front end.
pub fn rows_from_json(value: &Value) -> Vec<Row> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| entry.as_object())
        .map(|obj| {
            obj.iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Row>()
        })
        .collect()
}

/// Read a string field from a row.
///
/// Numeric cells are accepted and formatted, since identifier columns in
/// export files frequently hold bare numbers. Returns `None` for null,
/// missing, or blank cells.
pub fn field_str(row: &Row, name: &str) -> Option<String> {
    match row.get(name)? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a numeric field from a row.
///
/// Accepts JSON numbers and numeric strings. Returns `None` for null,
/// missing, or unparsable cells.
pub fn field_f64(row: &Row, name: &str) -> Option<f64> {
    match row.get(name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
