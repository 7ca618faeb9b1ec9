//! JSON output serialization for filter results.
//!
//! This module provides JSON serialization with support for both compact and
//! pretty-printed output formats. All output is deterministic (object keys
//! keep their insertion order) and follows standard JSON formatting rules.
//!
//! # Features
//!
//! - **Compact output** via [`to_json()`] - minimal whitespace for efficient transmission
//! - **Pretty output** via [`to_json_pretty()`] - human-readable with 2-space indentation
//! - **String escaping** - handles special characters, control codes, and Unicode
//! - **Deterministic** - object keys come out in the order the document declared them
//!
//! # Examples
//!
//! ```
//! use sprig::Value;
//! use sprig::output::{to_json, to_json_pretty};
//!
//! let value = Value::Number(42.0);
//!
//! // Compact output
//! assert_eq!(to_json(&value), "42");
//!
//! // Pretty output (identical for simple values)
//! assert_eq!(to_json_pretty(&value), "42");
//! ```

use indexmap::IndexMap;

use crate::value::Value;

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => self.print_number(*n),
            Value::String(s) => {
                // Escape special characters
                format!("\"{}\"", self.escape_string(s))
            }
            Value::Array(arr) => self.print_array(arr, indent),
            Value::Object(obj) => self.print_object(obj, indent),
        }
    }

    fn print_number(&self, n: f64) -> String {
        // JSON has no NaN or infinities; serialize them as null.
        if n.is_finite() {
            n.to_string()
        } else {
            "null".to_string()
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let mut result = "[\n".to_string();
            let items: Vec<String> = arr
                .iter()
                .map(|v| {
                    format!(
                        "{}{}",
                        self.indent(indent + 1),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push(']');
            result
        } else {
            let items: Vec<String> = arr.iter().map(|v| self.print_value(v, indent)).collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_object(&self, obj: &IndexMap<String, Value>, indent: usize) -> String {
        if obj.is_empty() {
            return "{}".to_string();
        }

        if self.pretty {
            let mut result = "{\n".to_string();
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        self.escape_string(k),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push('}');
            result
        } else {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!("\"{}\":{}", self.escape_string(k), self.print_value(v, indent))
                })
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => {
                    // Unicode escape for control chars
                    format!("\\u{:04x}", c as u32).chars().collect()
                }
                c => vec![c],
            })
            .collect()
    }
}

// Convenience functions

/// Converts a Value to compact JSON string representation.
///
/// This function produces minified JSON output with no extra whitespace,
/// suitable for network transmission or storage where space is a concern.
///
/// # Examples
///
/// ```
/// use sprig::Value;
/// use sprig::output::to_json;
/// use indexmap::IndexMap;
///
/// let mut obj = IndexMap::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Number(30.0));
///
/// let json = to_json(&Value::Object(obj));
/// assert_eq!(json, r#"{"name":"Alice","age":30}"#);
/// ```
///
/// # Features
///
/// - No indentation or extra whitespace
/// - Deterministic output (object keys keep insertion order)
/// - Proper string escaping for special characters
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a Value to pretty-printed JSON string representation.
///
/// This function produces human-readable JSON output with 2-space indentation,
/// suitable for debugging, logging, or user-facing output.
///
/// # Examples
///
/// ```
/// use sprig::Value;
/// use sprig::output::to_json_pretty;
/// use indexmap::IndexMap;
///
/// let mut obj = IndexMap::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Number(30.0));
///
/// let json = to_json_pretty(&Value::Object(obj));
/// // Output:
/// // {
/// //   "name": "Alice",
/// //   "age": 30
/// // }
/// ```
///
/// # Features
///
/// - 2-space indentation per level
/// - One element/property per line for arrays and objects
/// - Deterministic output (object keys keep insertion order)
/// - Proper string escaping for special characters
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}
