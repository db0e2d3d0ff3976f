//! # dictjson-core
//!
//! An ordered in-memory dictionary of tagged values with a strict JSON-dialect
//! encoder and decoder.
//!
//! Values are numbers (`f64`), booleans, text, nested dictionaries and
//! homogeneous arrays of those four kinds. Every typed accessor works by value:
//! setters store a deep copy, getters return a deep copy, so no two owners ever
//! share mutable state.
//!
//! The text format is a strict subset of JSON: no whitespace between tokens, no
//! escape sequences, numbers rendered with exactly three decimals, no `null`,
//! no nested or mixed arrays. Decoding is all-or-nothing.
//!
//! ## Quick start
//!
//! ```rust
//! use dictjson_core::{from_json, to_json, Dictionary};
//!
//! let mut d = Dictionary::new();
//! d.set_number("n", 3.14);
//! d.set_boolean("ok", true);
//! d.set_text_array("tags", &["a", "b"]);
//!
//! let json = to_json(&d);
//! assert_eq!(json, r#"{"n":3.140,"ok":true,"tags":["a","b"]}"#);
//!
//! // JSON → Dictionary (roundtrip)
//! let back = from_json(&json).unwrap();
//! assert_eq!(back, d);
//! ```
//!
//! ## Modules
//!
//! - [`dictionary`]: `Dictionary` and its typed set/get/remove/copy operations
//! - [`types`]: `Value`, `Array`, `ElementKind`
//! - [`encoder`]: Dictionary → JSON-dialect text
//! - [`decoder`]: JSON-dialect text → Dictionary, plus the splitter and number grammar
//! - [`interop`]: conversions to and from standard JSON through `serde_json`
//! - [`error`]: Error types for decode/conversion failures

pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod interop;
pub mod types;

pub use decoder::{decode, from_json, is_number, split_top_level};
pub use dictionary::Dictionary;
pub use encoder::to_json;
pub use error::DictError;
pub use types::{Array, ElementKind, Value};
