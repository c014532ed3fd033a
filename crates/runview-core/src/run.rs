//! Pipeline Run records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CoreError, JsonColumn, NullJson, PipelineSpec, PipelineSpecId, RunId, RunState, TaskRun};

/// One execution of a pipeline definition.
///
/// `Run::default()` is the zero-value run: no outputs, no errors, no
/// relations loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    /// Unique run identifier.
    pub id: RunId,

    /// Definition this run was executed from.
    pub pipeline_spec_id: PipelineSpecId,

    /// The definition itself, when the relation was loaded.
    pub pipeline_spec: Option<PipelineSpec>,

    /// Current run state.
    pub state: RunState,

    /// Final outputs, one slot per terminal task. Unset until the run finishes.
    pub outputs: NullJson,

    /// Error of every terminal task, `None` where the task succeeded.
    pub all_errors: Vec<Option<String>>,

    /// Errors that failed the run.
    pub fatal_errors: Vec<Option<String>>,

    /// Variables the run was started with.
    pub inputs: JsonColumn,

    /// Task executions, in execution order.
    pub pipeline_task_runs: Vec<TaskRun>,

    /// When the run was created.
    pub created_at: DateTime<Utc>,

    /// When the run finished, if it has.
    pub finished_at: Option<DateTime<Utc>>,
}

impl Run {
    /// Create a new running Run.
    pub fn new(id: RunId, pipeline_spec_id: PipelineSpecId) -> Self {
        Self {
            id,
            pipeline_spec_id,
            created_at: Utc::now(),
            ..Self::default()
        }
    }

    /// Builder method to attach the loaded pipeline definition.
    pub fn with_pipeline_spec(mut self, spec: PipelineSpec) -> Self {
        self.pipeline_spec = Some(spec);
        self
    }

    /// Builder method to add a task run.
    pub fn with_task_run(mut self, task_run: TaskRun) -> Self {
        self.pipeline_task_runs.push(task_run);
        self
    }

    /// Decode the outputs into one display string per slot.
    ///
    /// The payload must be a JSON array. Strings pass through, `null` stays
    /// empty, any other element is rendered as compact JSON. An unset
    /// column yields no outputs.
    pub fn string_outputs(&self) -> Result<Vec<Option<String>>, CoreError> {
        if !self.outputs.valid {
            return Ok(Vec::new());
        }

        let items = match self.outputs.val.decode()? {
            Value::Array(items) => items,
            other => return Err(CoreError::UnsupportedOutput(CoreError::kind_of(&other))),
        };

        items
            .into_iter()
            .map(|item| -> Result<Option<String>, CoreError> {
                match item {
                    Value::Null => Ok(None),
                    Value::String(s) => Ok(Some(s)),
                    other => Ok(Some(serde_json::to_string(&other)?)),
                }
            })
            .collect()
    }

    /// All task errors, position-aligned with the terminal tasks.
    pub fn string_all_errors(&self) -> Vec<Option<String>> {
        self.all_errors.clone()
    }

    /// Check if any terminal task reported an error.
    pub fn has_errors(&self) -> bool {
        self.all_errors.iter().any(Option::is_some)
    }
}
