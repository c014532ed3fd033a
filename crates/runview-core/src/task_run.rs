//! Task execution records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{JsonColumn, RunId, TaskRunId};

/// Execution of a single task within a Run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRun {
    /// Unique task run identifier.
    pub id: TaskRunId,

    /// Run this task belongs to.
    pub run_id: RunId,

    /// Task kind (e.g. "http", "jsonparse", "multiply").
    pub task_type: String,

    /// Node identifier of the task in the pipeline graph.
    pub dot_id: String,

    /// Task output, if the task produced one.
    pub output: Option<JsonColumn>,

    /// Error message if the task failed.
    pub error: Option<String>,

    /// When the task started.
    pub created_at: DateTime<Utc>,

    /// When the task finished, if it has.
    pub finished_at: Option<DateTime<Utc>>,
}

impl TaskRun {
    /// Create a new unfinished TaskRun.
    pub fn new(run_id: RunId, task_type: impl Into<String>, dot_id: impl Into<String>) -> Self {
        Self {
            id: TaskRunId::generate(),
            run_id,
            task_type: task_type.into(),
            dot_id: dot_id.into(),
            output: None,
            error: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Builder method to set the output.
    pub fn with_output(mut self, output: JsonColumn) -> Self {
        self.output = Some(output);
        self
    }

    /// Builder method to set the error.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Builder method to set the finish time.
    pub fn with_finished_at(mut self, finished_at: DateTime<Utc>) -> Self {
        self.finished_at = Some(finished_at);
        self
    }
}
