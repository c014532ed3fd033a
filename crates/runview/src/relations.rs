//! Relation loading for run views.
//!
//! A run's pipeline definition and task runs are relations. `Preloaded`
//! reads them from the record as the persistence layer materialized them;
//! a request-scoped batching loader can implement [`RunRelations`] instead
//! without changing any view accessor.

use runview_core::{Run, TaskRun};

use crate::ViewError;

/// Source of a run's related records.
pub trait RunRelations: Send + Sync {
    /// Graph definition (DOT) of the run's pipeline.
    fn observation_source(&self, run: &Run) -> Result<String, ViewError>;

    /// Task executions of the run, in execution order.
    fn task_runs(&self, run: &Run) -> Result<Vec<TaskRun>, ViewError>;
}

/// Relations already loaded onto the `Run`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preloaded;

impl RunRelations for Preloaded {
    fn observation_source(&self, run: &Run) -> Result<String, ViewError> {
        run.pipeline_spec
            .as_ref()
            .map(|spec| spec.dot_dag_source.clone())
            .ok_or(ViewError::RelationNotLoaded("pipeline_spec"))
    }

    fn task_runs(&self, run: &Run) -> Result<Vec<TaskRun>, ViewError> {
        Ok(run.pipeline_task_runs.clone())
    }
}
