//! Core record errors.

use thiserror::Error;

/// Errors raised while interpreting stored run records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Stored JSON text could not be parsed.
    #[error("{0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Output payload has a shape the API cannot present.
    #[error("unable to process output type {0}")]
    UnsupportedOutput(&'static str),
}

impl CoreError {
    /// Name of the JSON kind, as used in `UnsupportedOutput` messages.
    pub fn kind_of(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}
