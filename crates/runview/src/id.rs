//! API identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

use runview_core::{PipelineSpecId, RunId, TaskRunId};

/// String-encoded identifier as exposed by the query API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiId(String);

impl ApiId {
    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RunId> for ApiId {
    fn from(id: RunId) -> Self {
        Self(id.to_string())
    }
}

impl From<PipelineSpecId> for ApiId {
    fn from(id: PipelineSpecId) -> Self {
        Self(id.to_string())
    }
}

impl From<TaskRunId> for ApiId {
    fn from(id: TaskRunId) -> Self {
        Self(id.to_string())
    }
}
