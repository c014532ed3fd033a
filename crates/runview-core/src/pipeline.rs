//! Pipeline definition records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::PipelineSpecId;

/// A stored pipeline definition a Run was executed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSpec {
    /// Definition identifier.
    pub id: PipelineSpecId,

    /// Task graph in DOT syntax.
    pub dot_dag_source: String,

    /// When the definition was stored.
    pub created_at: DateTime<Utc>,
}

impl PipelineSpec {
    /// Create a new PipelineSpec.
    pub fn new(id: PipelineSpecId, dot_dag_source: impl Into<String>) -> Self {
        Self {
            id,
            dot_dag_source: dot_dag_source.into(),
            created_at: Utc::now(),
        }
    }
}
