//! Tagged value types stored in a [`Dictionary`].
//!
//! Every entry holds exactly one [`Value`]. Arrays are homogeneous by
//! construction: [`Array`] has one variant per element kind, so a mixed or
//! nested array cannot be expressed at all.

use crate::dictionary::Dictionary;

/// A single dictionary value. Owned exclusively by the entry (or array slot)
/// that holds it; cloning produces a fully independent deep copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    Text(String),
    Nested(Dictionary),
    Array(Array),
}

/// A homogeneous array. The element kind is fixed by the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    Number(Vec<f64>),
    Boolean(Vec<bool>),
    Text(Vec<String>),
    Nested(Vec<Dictionary>),
}

/// The four kinds an array element may have. Arrays never hold arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Number,
    Boolean,
    Text,
    Nested,
}

impl Value {
    /// Short lowercase name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Text(_) => "text",
            Value::Nested(_) => "nested",
            Value::Array(_) => "array",
        }
    }
}

impl Array {
    pub fn kind(&self) -> ElementKind {
        match self {
            Array::Number(_) => ElementKind::Number,
            Array::Boolean(_) => ElementKind::Boolean,
            Array::Text(_) => ElementKind::Text,
            Array::Nested(_) => ElementKind::Nested,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Array::Number(items) => items.len(),
            Array::Boolean(items) => items.len(),
            Array::Text(items) => items.len(),
            Array::Nested(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Nested(d)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}
