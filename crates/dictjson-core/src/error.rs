//! Error types for dictionary decoding and standard-JSON conversion.

use thiserror::Error;

/// Errors that can occur while decoding dictionary JSON or converting
/// between a [`Dictionary`](crate::Dictionary) and `serde_json` values.
#[derive(Error, Debug)]
pub enum DictError {
    /// The document did not start with `{` and end with `}`.
    #[error("document must start with '{{' and end with '}}'")]
    NotAnObject,

    /// A top-level fragment did not begin with a non-empty quoted key.
    #[error("malformed key in fragment `{0}`")]
    MalformedKey(String),

    /// The closing key quote was not immediately followed by `:`.
    #[error("expected ':' after key `{0}`")]
    MissingColon(String),

    /// The same key appeared twice in one object.
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    /// A value fragment matched none of the dialect's value shapes.
    #[error("invalid value for key `{key}`: `{fragment}`")]
    InvalidValue { key: String, fragment: String },

    /// An array was empty, of unknown element type, or not homogeneous.
    #[error("invalid array for key `{key}`: {reason}")]
    InvalidArray { key: String, reason: String },

    /// Objects and arrays were nested deeper than the decoder allows.
    #[error("nesting exceeds {0} levels")]
    TooDeep(usize),

    /// A `serde_json` value has no counterpart in the dictionary model
    /// (null, nested arrays, mixed arrays, non-object root).
    #[error("value not representable as a dictionary entry: {0}")]
    Unrepresentable(String),

    /// Standard JSON text could not be parsed or produced by `serde_json`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout dictjson-core.
pub type Result<T> = std::result::Result<T, DictError>;
