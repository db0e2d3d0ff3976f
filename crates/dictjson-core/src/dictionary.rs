//! The ordered, key-unique dictionary and its value-semantics accessors.
//!
//! All typed setters copy the caller's data in and all typed getters copy the
//! stored data out, so a caller never holds a mutable alias into the tree.
//! Lookups that find the key under a different type report `None`, exactly as
//! if the key were missing.
//!
//! # Example
//! ```
//! use dictjson_core::Dictionary;
//!
//! let mut d = Dictionary::new();
//! d.set_number("k", 1.0);
//! d.set_text("k", "x");
//! assert_eq!(d.get_number("k"), None);
//! assert_eq!(d.get_text("k").as_deref(), Some("x"));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::DictError;
use crate::types::{Array, Value};

/// An ordered collection of `(key, Value)` entries with unique, non-empty,
/// case-sensitive keys. Order is insertion order and only affects
/// serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Value)>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the stored value without copying it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Replace-or-insert `value` under `key`.
    ///
    /// An existing entry is removed first and the new one is appended, so a
    /// replaced key moves to the end of the order. Returns `false` and leaves
    /// the dictionary untouched when `key` is empty.
    pub fn set(&mut self, key: &str, value: Value) -> bool {
        if key.is_empty() {
            tracing::debug!(value_type = value.type_name(), "ignoring set with empty key");
            return false;
        }
        self.remove(key);
        self.entries.push((key.to_string(), value));
        true
    }

    /// Remove the entry for `key`. Returns whether an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// A fully independent deep copy of the whole tree.
    pub fn copy(&self) -> Dictionary {
        self.clone()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    // ------------------------------------------------------------------------
    // Typed setters
    // ------------------------------------------------------------------------

    pub fn set_number(&mut self, key: &str, value: f64) -> bool {
        self.set(key, Value::Number(value))
    }

    pub fn set_boolean(&mut self, key: &str, value: bool) -> bool {
        self.set(key, Value::Boolean(value))
    }

    pub fn set_text(&mut self, key: &str, value: &str) -> bool {
        self.set(key, Value::Text(value.to_string()))
    }

    /// Stores a deep copy of `value`; later changes to either side are not shared.
    pub fn set_nested(&mut self, key: &str, value: &Dictionary) -> bool {
        self.set(key, Value::Nested(value.clone()))
    }

    pub fn set_number_array(&mut self, key: &str, elements: &[f64]) -> bool {
        self.set(key, Value::Array(Array::Number(elements.to_vec())))
    }

    pub fn set_boolean_array(&mut self, key: &str, elements: &[bool]) -> bool {
        self.set(key, Value::Array(Array::Boolean(elements.to_vec())))
    }

    pub fn set_text_array<S: AsRef<str>>(&mut self, key: &str, elements: &[S]) -> bool {
        let items = elements.iter().map(|s| s.as_ref().to_string()).collect();
        self.set(key, Value::Array(Array::Text(items)))
    }

    pub fn set_nested_array(&mut self, key: &str, elements: &[Dictionary]) -> bool {
        self.set(key, Value::Array(Array::Nested(elements.to_vec())))
    }

    // ------------------------------------------------------------------------
    // Typed getters
    // ------------------------------------------------------------------------

    pub fn get_number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Returns a deep copy of the nested dictionary stored under `key`.
    pub fn get_nested(&self, key: &str) -> Option<Dictionary> {
        match self.get(key)? {
            Value::Nested(d) => Some(d.clone()),
            _ => None,
        }
    }

    pub fn get_number_array(&self, key: &str) -> Option<Vec<f64>> {
        match self.get(key)? {
            Value::Array(Array::Number(items)) => Some(items.clone()),
            _ => None,
        }
    }

    pub fn get_boolean_array(&self, key: &str) -> Option<Vec<bool>> {
        match self.get(key)? {
            Value::Array(Array::Boolean(items)) => Some(items.clone()),
            _ => None,
        }
    }

    pub fn get_text_array(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            Value::Array(Array::Text(items)) => Some(items.clone()),
            _ => None,
        }
    }

    pub fn get_nested_array(&self, key: &str) -> Option<Vec<Dictionary>> {
        match self.get(key)? {
            Value::Array(Array::Nested(items)) => Some(items.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoder::to_json(self))
    }
}

impl FromStr for Dictionary {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decoder::decode(s)
    }
}
