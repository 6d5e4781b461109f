//! Plain text rendering of saved records.

use serde_json::Value;

const HEADER: &str = "eCourts Scraper Results";

/// Flattens a record into readable lines.
///
/// Top-level scalars become `key: value`. Nested mappings and sequences get
/// an upper-cased `KEY:` line followed by indented `name: value` or
/// numbered `n. item` lines.
pub fn format_text_output(record: &Value) -> String {
    let mut lines = vec![HEADER.to_string(), "=".repeat(25), String::new()];

    let Value::Object(fields) = record else {
        lines.push(scalar_text(record));
        return lines.join("\n");
    };

    for (key, value) in fields {
        match value {
            Value::Object(nested) => {
                lines.push(format!("{}:", key.to_uppercase()));
                for (sub_key, sub_value) in nested {
                    lines.push(format!("  {sub_key}: {}", scalar_text(sub_value)));
                }
            }
            Value::Array(items) => {
                lines.push(format!("{}:", key.to_uppercase()));
                for (i, item) in items.iter().enumerate() {
                    lines.push(format!("  {}. {}", i + 1, scalar_text(item)));
                }
            }
            other => lines.push(format!("{key}: {}", scalar_text(other))),
        }
    }

    lines.join("\n")
}

/// Strings print bare, null prints empty, anything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
