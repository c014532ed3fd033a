//! Task run view.

use chrono::{DateTime, Utc};
use tracing::warn;

use runview_core::TaskRun;

use crate::time::value_or_zero;
use crate::{ApiId, TaskRunResponse};

/// Placeholder for a task output that cannot be re-encoded.
pub const TASK_OUTPUT_RETRIEVAL_ERROR: &str = "error: unable to retrieve output";

/// API view over one task execution.
#[derive(Debug, Clone)]
pub struct TaskRunView {
    task_run: TaskRun,
}

impl TaskRunView {
    /// Create a new TaskRunView.
    pub fn new(task_run: TaskRun) -> Self {
        Self { task_run }
    }

    pub fn id(&self) -> ApiId {
        ApiId::from(self.task_run.id)
    }

    pub fn task_type(&self) -> &str {
        &self.task_run.task_type
    }

    pub fn dot_id(&self) -> &str {
        &self.task_run.dot_id
    }

    /// Output as compact JSON text; empty when the task produced none.
    pub fn output(&self) -> String {
        let Some(output) = &self.task_run.output else {
            return String::new();
        };

        match output.to_compact_string() {
            Ok(text) => text,
            Err(e) => {
                warn!(task_run_id = %self.task_run.id, error = %e, "failed to encode task output");
                TASK_OUTPUT_RETRIEVAL_ERROR.to_string()
            }
        }
    }

    pub fn error(&self) -> Option<String> {
        self.task_run.error.clone()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.task_run.created_at
    }

    /// Finish time, or the zero instant while the task is unfinished.
    pub fn finished_at(&self) -> DateTime<Utc> {
        value_or_zero(self.task_run.finished_at)
    }

    /// Resolve every field into a response body.
    pub fn to_response(&self) -> TaskRunResponse {
        TaskRunResponse {
            id: self.id(),
            task_type: self.task_type().to_string(),
            dot_id: self.dot_id().to_string(),
            output: self.output(),
            error: self.error(),
            created_at: self.created_at(),
            finished_at: self.finished_at(),
        }
    }
}

/// Wrap task runs in views, preserving order.
pub fn new_task_run_views(task_runs: impl IntoIterator<Item = TaskRun>) -> Vec<TaskRunView> {
    task_runs.into_iter().map(TaskRunView::new).collect()
}
