//! Conversions between [`Dictionary`] and standard JSON via `serde_json`.
//!
//! The native codec speaks a strict dialect (unescaped text, fixed 3-decimal
//! numbers). These conversions are the bridge to RFC 8259 consumers: output is
//! produced by `serde_json`, so text is escaped and numbers keep full
//! precision. Insertion order survives both directions because the workspace
//! enables serde_json's `preserve_order` feature.
//!
//! Going from `serde_json::Value` to a dictionary is fallible. The model has no
//! `null`, no nested arrays, no mixed-type arrays and no untyped empty arrays;
//! each of those is reported as [`DictError::Unrepresentable`].

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Number};

use crate::dictionary::Dictionary;
use crate::error::{DictError, Result};
use crate::types::{Array, Value};

impl Dictionary {
    /// Parse standard JSON text (whitespace, escapes and exponents allowed).
    pub fn from_standard_json(json: &str) -> Result<Dictionary> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Dictionary::try_from(&value)
    }

    /// Render as standard, escaped JSON text.
    pub fn to_standard_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Dictionary → serde_json
// ============================================================================

impl From<&Dictionary> for serde_json::Value {
    fn from(dictionary: &Dictionary) -> Self {
        let map: Map<String, serde_json::Value> = dictionary
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => number_to_json(*n),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Nested(d) => serde_json::Value::from(d),
            Value::Array(arr) => serde_json::Value::from(arr),
        }
    }
}

impl From<&Array> for serde_json::Value {
    fn from(arr: &Array) -> Self {
        let items: Vec<serde_json::Value> = match arr {
            Array::Number(items) => items.iter().map(|n| number_to_json(*n)).collect(),
            Array::Boolean(items) => items.iter().map(|b| serde_json::Value::Bool(*b)).collect(),
            Array::Text(items) => items
                .iter()
                .map(|s| serde_json::Value::String(s.clone()))
                .collect(),
            Array::Nested(items) => items.iter().map(serde_json::Value::from).collect(),
        };
        serde_json::Value::Array(items)
    }
}

/// Non-finite numbers have no JSON form and become `null`.
fn number_to_json(n: f64) -> serde_json::Value {
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

// ============================================================================
// serde_json → Dictionary
// ============================================================================

impl TryFrom<&serde_json::Value> for Dictionary {
    type Error = DictError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => object_to_dictionary(map),
            other => Err(DictError::Unrepresentable(format!(
                "root must be an object, got {}",
                json_type_name(other)
            ))),
        }
    }
}

fn object_to_dictionary(map: &Map<String, serde_json::Value>) -> Result<Dictionary> {
    let mut dictionary = Dictionary::new();
    for (key, value) in map {
        if key.is_empty() {
            return Err(DictError::Unrepresentable("empty key".to_string()));
        }
        let converted = json_to_value(key, value)?;
        dictionary.set(key, converted);
    }
    Ok(dictionary)
}

fn json_to_value(key: &str, value: &serde_json::Value) -> Result<Value> {
    match value {
        serde_json::Value::Number(n) => Ok(Value::Number(json_number(key, n)?)),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Object(map) => Ok(Value::Nested(object_to_dictionary(map)?)),
        serde_json::Value::Array(items) => Ok(Value::Array(json_to_array(key, items)?)),
        serde_json::Value::Null => Err(DictError::Unrepresentable(format!(
            "`{key}` is null"
        ))),
    }
}

/// Pick the element kind from the first item and require every item to match.
fn json_to_array(key: &str, items: &[serde_json::Value]) -> Result<Array> {
    let first = items.first().ok_or_else(|| {
        DictError::Unrepresentable(format!("`{key}` is an empty array with no element type"))
    })?;
    let mismatch = |item: &serde_json::Value| {
        DictError::Unrepresentable(format!(
            "`{key}` mixes {} and {} elements",
            json_type_name(first),
            json_type_name(item)
        ))
    };

    let array = match first {
        serde_json::Value::Number(_) => Array::Number(
            items
                .iter()
                .map(|item| match item {
                    serde_json::Value::Number(n) => json_number(key, n),
                    other => Err(mismatch(other)),
                })
                .collect::<Result<_>>()?,
        ),
        serde_json::Value::Bool(_) => Array::Boolean(
            items
                .iter()
                .map(|item| item.as_bool().ok_or_else(|| mismatch(item)))
                .collect::<Result<_>>()?,
        ),
        serde_json::Value::String(_) => Array::Text(
            items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| mismatch(item))
                })
                .collect::<Result<_>>()?,
        ),
        serde_json::Value::Object(_) => Array::Nested(
            items
                .iter()
                .map(|item| match item {
                    serde_json::Value::Object(map) => object_to_dictionary(map),
                    other => Err(mismatch(other)),
                })
                .collect::<Result<_>>()?,
        ),
        serde_json::Value::Array(_) | serde_json::Value::Null => {
            return Err(DictError::Unrepresentable(format!(
                "`{key}` holds {} elements",
                json_type_name(first)
            )))
        }
    };
    Ok(array)
}

fn json_number(key: &str, n: &Number) -> Result<f64> {
    n.as_f64()
        .ok_or_else(|| DictError::Unrepresentable(format!("`{key}` is not an f64: {n}")))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ============================================================================
// serde::Serialize
// ============================================================================

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Nested(d) => d.serialize(serializer),
            Value::Array(arr) => arr.serialize(serializer),
        }
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        match self {
            Array::Number(items) => {
                for n in items {
                    if n.is_finite() {
                        seq.serialize_element(n)?;
                    } else {
                        seq.serialize_element(&())?;
                    }
                }
            }
            Array::Boolean(items) => {
                for b in items {
                    seq.serialize_element(b)?;
                }
            }
            Array::Text(items) => {
                for s in items {
                    seq.serialize_element(s)?;
                }
            }
            Array::Nested(items) => {
                for d in items {
                    seq.serialize_element(d)?;
                }
            }
        }
        seq.end()
    }
}
