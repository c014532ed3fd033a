//! JSON columns as stored by the persistence layer.
//!
//! Pipeline values are persisted as JSON text. The text is kept verbatim
//! here so a corrupt column surfaces as a decode error at presentation time
//! instead of failing the whole record load.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CoreError;

/// Raw JSON text of a stored column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonColumn(String);

impl JsonColumn {
    /// Wrap stored text without validating it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Encode a value as a column.
    pub fn from_value(value: &Value) -> Self {
        Self(value.to_string())
    }

    /// Get the stored text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the stored text.
    pub fn decode(&self) -> Result<Value, CoreError> {
        Ok(serde_json::from_str(&self.0)?)
    }

    /// Re-encode the stored text without insignificant whitespace.
    pub fn to_compact_string(&self) -> Result<String, CoreError> {
        let value = self.decode()?;
        Ok(serde_json::to_string(&value)?)
    }
}

impl Default for JsonColumn {
    fn default() -> Self {
        Self("null".to_string())
    }
}

impl From<Value> for JsonColumn {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// A nullable JSON column: validity flag plus payload.
///
/// `valid == false` means the column was never written (or written as SQL
/// NULL); the payload is then meaningless. A valid column may still hold
/// text that fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullJson {
    pub valid: bool,
    pub val: JsonColumn,
}

impl NullJson {
    /// An unset column.
    pub fn null() -> Self {
        Self::default()
    }

    /// A set column holding `value`.
    pub fn from_value(value: &Value) -> Self {
        Self {
            valid: true,
            val: JsonColumn::from_value(value),
        }
    }

    /// A set column holding raw stored text.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            valid: true,
            val: JsonColumn::new(raw),
        }
    }
}
