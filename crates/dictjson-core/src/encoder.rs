//! Dictionary → JSON-dialect encoder.
//!
//! Walks the value tree depth-first and renders it as compact text:
//!
//! - **Objects**: `{"k":v,...}` in insertion order, `{}` when empty
//! - **Numbers**: fixed-point with [`NUMBER_PRECISION`] decimals (`3.140`, `-2.000`),
//!   never scientific notation, integers not special-cased
//! - **Booleans**: `true` / `false`
//! - **Text**: wrapped in quotes verbatim, with no escaping
//! - **Arrays**: `[e1,e2,...]` using the per-kind rules above, `[]` when empty
//!
//! Text is emitted unescaped so that [`decode`](crate::decode) reads it back
//! byte for byte. Values containing `"` therefore do not survive a round trip;
//! use [`Dictionary::to_standard_json`] when RFC 8259 output is required.
//!
//! # Example
//! ```
//! use dictjson_core::{to_json, Dictionary};
//! let mut d = Dictionary::new();
//! d.set_number("pi", 3.14159);
//! d.set_text_array("tags", &["a", "b"]);
//! assert_eq!(to_json(&d), r#"{"pi":3.142,"tags":["a","b"]}"#);
//! ```

use crate::dictionary::Dictionary;
use crate::types::{Array, Value};

/// Number of fractional digits every number is rendered with.
pub const NUMBER_PRECISION: usize = 3;

/// Render a dictionary as JSON-dialect text. Never fails for a well-formed tree.
pub fn to_json(dictionary: &Dictionary) -> String {
    let mut out = String::new();
    encode_dictionary(dictionary, &mut out);
    out
}

fn encode_dictionary(dictionary: &Dictionary, out: &mut String) {
    out.push('{');
    let mut first = true;
    for (key, value) in dictionary.iter() {
        if !first {
            out.push(',');
        }
        first = false;
        out.push('"');
        out.push_str(key);
        out.push_str("\":");
        encode_value(value, out);
    }
    out.push('}');
}

fn encode_value(value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::Boolean(b) => encode_boolean(*b, out),
        Value::Text(s) => encode_text(s, out),
        Value::Nested(d) => encode_dictionary(d, out),
        Value::Array(arr) => encode_array(arr, out),
    }
}

/// Emit `[`, the comma-joined elements, then `]`.
fn encode_array(arr: &Array, out: &mut String) {
    out.push('[');
    match arr {
        Array::Number(items) => join(items, out, |n, out| out.push_str(&format_number(*n))),
        Array::Boolean(items) => join(items, out, |b, out| encode_boolean(*b, out)),
        Array::Text(items) => join(items, out, |s, out| encode_text(s, out)),
        Array::Nested(items) => join(items, out, encode_dictionary),
    }
    out.push(']');
}

fn join<T>(items: &[T], out: &mut String, mut emit: impl FnMut(&T, &mut String)) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        emit(item, out);
    }
}

/// Fixed-point rendering, e.g. `3.14` → `3.140`, `-2` → `-2.000`.
///
/// Non-finite values render as Rust prints them (`NaN`, `inf`), which the
/// decoder rejects.
pub fn format_number(n: f64) -> String {
    format!("{:.*}", NUMBER_PRECISION, n)
}

fn encode_boolean(b: bool, out: &mut String) {
    out.push_str(if b { "true" } else { "false" });
}

fn encode_text(s: &str, out: &mut String) {
    out.push('"');
    out.push_str(s);
    out.push('"');
}
