//! JSON-dialect → Dictionary decoder.
//!
//! A recursive descent over a single text buffer. Each object body is cut into
//! `"key":value` fragments by [`split_top_level`], and each value fragment is
//! typed by sniffing its content in a fixed priority order:
//!
//! 1. `"…"` → text (quotes stripped, no unescaping)
//! 2. `true` / `false` → boolean
//! 3. passes [`is_number`] → number
//! 4. `{…}` → nested dictionary (recursive)
//! 5. `[…]` → homogeneous array, element kind taken from the first element
//!
//! # Key design decisions
//!
//! - **No whitespace tolerance**: the dialect is a strict subset of JSON; a space
//!   between tokens is a grammar violation, not layout.
//! - **All-or-nothing**: the first violation aborts the whole document. The
//!   partially built tree is owned by the failing call frame and is dropped on
//!   the error path, so nothing escapes.
//! - **Independent counters**: the splitter tracks quotes, brace depth and
//!   bracket depth separately. A comma inside quotes never splits, but braces
//!   and brackets inside quoted text still count, so text holding an unbalanced
//!   `{` or `[` makes the enclosing document fail.
//! - **Bounded depth**: objects and arrays may nest at most [`MAX_DEPTH`] levels;
//!   deeper input is rejected instead of exhausting the stack.
//! - **Empty arrays are rejected**: `[]` has no first element to infer a kind
//!   from, and arrays never exist without a kind.

use crate::dictionary::Dictionary;
use crate::error::{DictError, Result};
use crate::types::{Array, ElementKind, Value};

/// Deepest nesting of objects and arrays accepted by [`decode`].
pub const MAX_DEPTH: usize = 256;

/// Decode JSON-dialect text into a dictionary, reporting the first violation.
///
/// Documents nested deeper than [`MAX_DEPTH`] fail with [`DictError::TooDeep`].
pub fn decode(json: &str) -> Result<Dictionary> {
    decode_at(json, 1)
}

fn decode_at(json: &str, depth: usize) -> Result<Dictionary> {
    if depth > MAX_DEPTH {
        return Err(DictError::TooDeep(MAX_DEPTH));
    }
    let body = json
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or(DictError::NotAnObject)?;

    let mut dictionary = Dictionary::new();
    if body.is_empty() {
        return Ok(dictionary);
    }

    for fragment in split_top_level(body) {
        let (key, value_text) = parse_key(fragment)?;
        if dictionary.contains_key(key) {
            return Err(DictError::DuplicateKey(key.to_string()));
        }
        let value = parse_value(key, value_text, depth)?;
        dictionary.set(key, value);
    }

    Ok(dictionary)
}

/// Decode JSON-dialect text, returning `None` on any grammar violation.
///
/// # Example
/// ```
/// use dictjson_core::from_json;
/// let d = from_json(r#"{"a":"x,y","b":2}"#).unwrap();
/// assert_eq!(d.len(), 2);
/// assert!(from_json(r#"{"a":1,"a":2}"#).is_none());
/// ```
pub fn from_json(json: &str) -> Option<Dictionary> {
    match decode(json) {
        Ok(dictionary) => Some(dictionary),
        Err(err) => {
            tracing::debug!(error = %err, "rejected dictionary JSON");
            None
        }
    }
}

/// Split `s` on commas that sit outside quotes, braces and brackets.
///
/// Quote state, brace depth and bracket depth are tracked independently:
/// braces and brackets count even inside quotes. Always yields at least one
/// fragment; an empty input yields one empty fragment. Unbalanced delimiters
/// are not an error here: the offending fragment simply fails to parse later.
pub fn split_top_level(s: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut in_quotes = false;
    let mut brace_depth: isize = 0;
    let mut bracket_depth: isize = 0;
    let mut start = 0;

    for (i, b) in s.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b'{' => brace_depth += 1,
            b'}' => brace_depth -= 1,
            b'[' => bracket_depth += 1,
            b']' => bracket_depth -= 1,
            b',' if !in_quotes && brace_depth == 0 && bracket_depth == 0 => {
                fragments.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(&s[start..]);
    fragments
}

/// Numeric-literal grammar: digits with at most one leading `-` and at most one
/// interior `.` that is neither first, last, nor directly after the `-`.
///
/// Accepts `42`, `-3.5`, `007` and the bare `-`; rejects `1.2.3`, `1-2`, `.5`,
/// `5.`, `-.5` and `5-`.
pub fn is_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if !bytes.iter().all(|b| b.is_ascii_digit() || *b == b'.' || *b == b'-') {
        return false;
    }

    let last = bytes.len() - 1;
    let minus = s.find('-');
    let dot = s.find('.');
    let single_minus = minus.is_some() && minus == s.rfind('-');
    let single_dot = dot.is_some() && dot == s.rfind('.');

    match (minus, dot) {
        (Some(m), Some(d)) => single_minus && single_dot && m == 0 && d > m + 1 && d != last,
        (Some(m), None) => single_minus && m == 0,
        (None, Some(d)) => single_dot && d != 0 && d != last,
        (None, None) => true,
    }
}

/// Split a fragment into its key and the value text after the colon.
fn parse_key(fragment: &str) -> Result<(&str, &str)> {
    let malformed = || DictError::MalformedKey(fragment.to_string());

    let rest = fragment.strip_prefix('"').ok_or_else(malformed)?;
    let end = rest.find('"').ok_or_else(malformed)?;
    let key = &rest[..end];
    if key.is_empty() {
        return Err(malformed());
    }
    let value_text = rest[end + 1..]
        .strip_prefix(':')
        .ok_or_else(|| DictError::MissingColon(key.to_string()))?;
    Ok((key, value_text))
}

/// Type a value fragment by content sniffing, in priority order.
fn parse_value(key: &str, s: &str, depth: usize) -> Result<Value> {
    if let Some(text) = strip_quotes(s) {
        return Ok(Value::Text(text.to_string()));
    }
    if let Some(b) = parse_boolean(s) {
        return Ok(Value::Boolean(b));
    }
    if let Some(n) = parse_number(s) {
        return Ok(Value::Number(n));
    }
    if s.starts_with('{') && s.ends_with('}') {
        return Ok(Value::Nested(decode_at(s, depth + 1)?));
    }
    if let Some(body) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return Ok(Value::Array(parse_array(key, body, depth + 1)?));
    }
    Err(DictError::InvalidValue {
        key: key.to_string(),
        fragment: s.to_string(),
    })
}

/// Parse an array body (brackets already stripped). The first element's
/// leading byte picks the kind; every element must then match that kind.
fn parse_array(key: &str, body: &str, depth: usize) -> Result<Array> {
    if depth > MAX_DEPTH {
        return Err(DictError::TooDeep(MAX_DEPTH));
    }
    let elements = split_top_level(body);
    let kind = match body.as_bytes().first().copied() {
        Some(b'0'..=b'9' | b'-') => ElementKind::Number,
        Some(b'"') => ElementKind::Text,
        Some(b't' | b'f') => ElementKind::Boolean,
        Some(b'{') => ElementKind::Nested,
        Some(_) => return Err(array_error(key, "unrecognized element type")),
        None => return Err(array_error(key, "empty array has no element type")),
    };

    let mismatch = |element: &str| {
        array_error(key, &format!("element `{element}` does not match {kind:?} array"))
    };

    let array = match kind {
        ElementKind::Number => Array::Number(
            elements
                .into_iter()
                .map(|e| parse_number(e).ok_or_else(|| mismatch(e)))
                .collect::<Result<_>>()?,
        ),
        ElementKind::Text => Array::Text(
            elements
                .into_iter()
                .map(|e| strip_quotes(e).map(str::to_string).ok_or_else(|| mismatch(e)))
                .collect::<Result<_>>()?,
        ),
        ElementKind::Boolean => Array::Boolean(
            elements
                .into_iter()
                .map(|e| parse_boolean(e).ok_or_else(|| mismatch(e)))
                .collect::<Result<_>>()?,
        ),
        // Dictionaries decoded before a failing element are dropped with the
        // partially collected Vec.
        ElementKind::Nested => Array::Nested(
            elements
                .into_iter()
                .map(|e| decode_at(e, depth + 1))
                .collect::<Result<_>>()?,
        ),
    };
    Ok(array)
}

fn array_error(key: &str, reason: &str) -> DictError {
    DictError::InvalidArray {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn strip_quotes(s: &str) -> Option<&str> {
    if s.len() >= 2 {
        s.strip_prefix('"')?.strip_suffix('"')
    } else {
        None
    }
}

fn parse_boolean(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// A lone `-` passes the grammar and reads as zero.
fn parse_number(s: &str) -> Option<f64> {
    match s {
        "-" => Some(0.0),
        _ if is_number(s) => s.parse().ok(),
        _ => None,
    }
}
