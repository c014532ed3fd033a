//! Newtype wrappers for identifiers to ensure type safety.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a pipeline Run (database sequence value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(i64);

impl RunId {
    /// Create a new RunId from a sequence value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RunId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Reference to a stored pipeline definition.
///
/// Sequence values are 64-bit; the API never narrows them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineSpecId(i64);

impl PipelineSpecId {
    /// Create a new PipelineSpecId from a sequence value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PipelineSpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PipelineSpecId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a TaskRun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskRunId(Uuid);

impl TaskRunId {
    /// Create a TaskRunId from an existing UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random TaskRunId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TaskRunId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
