//! Run view.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use runview_core::{Run, RunState};

use crate::task_run::{new_task_run_views, TaskRunView};
use crate::time::value_or_zero;
use crate::{ApiId, Preloaded, RunRelations, RunResponse};

/// Placeholder for outputs of a run that never recorded any.
pub const OUTPUT_RETRIEVAL_ERROR: &str = "error: unable to retrieve outputs";

/// Placeholder for inputs that cannot be re-encoded.
pub const INPUT_RETRIEVAL_ERROR: &str = "error: unable to retrieve inputs";

/// API view over one pipeline run.
///
/// Accessors are independent and may be called in any order. None of them
/// fails: each field degrades on its own when the record is incomplete.
#[derive(Clone)]
pub struct RunView {
    run: Run,
    relations: Arc<dyn RunRelations>,
}

impl RunView {
    /// Create a view reading relations already loaded onto the run.
    pub fn new(run: Run) -> Self {
        Self::with_relations(run, Arc::new(Preloaded))
    }

    /// Create a view that resolves relations through `relations`.
    pub fn with_relations(run: Run, relations: Arc<dyn RunRelations>) -> Self {
        Self { run, relations }
    }

    /// Run identifier.
    pub fn id(&self) -> ApiId {
        ApiId::from(self.run.id)
    }

    /// Pipeline definition reference, rendered without narrowing.
    pub fn pipeline_spec_id(&self) -> ApiId {
        ApiId::from(self.run.pipeline_spec_id)
    }

    /// Stored run state.
    pub fn status(&self) -> RunState {
        self.run.state
    }

    /// Whether any terminal task reported an error.
    pub fn has_errors(&self) -> bool {
        self.run.has_errors()
    }

    /// Output values, one per terminal task.
    ///
    /// An unset outputs column yields [`OUTPUT_RETRIEVAL_ERROR`]; a payload
    /// that fails to decode yields the decode error's message. Both come
    /// back as a single-element list.
    pub fn outputs(&self) -> Vec<Option<String>> {
        if !self.run.outputs.valid {
            debug!(run_id = %self.run.id, "run outputs not recorded");
            return vec![Some(OUTPUT_RETRIEVAL_ERROR.to_string())];
        }

        match self.run.string_outputs() {
            Ok(outputs) => outputs,
            Err(e) => {
                warn!(run_id = %self.run.id, error = %e, "failed to decode run outputs");
                vec![Some(e.to_string())]
            }
        }
    }

    /// Same list as [`RunView::all_errors`]; stored fatal errors are not
    /// exposed separately.
    pub fn fatal_errors(&self) -> Vec<Option<String>> {
        self.run.string_all_errors()
    }

    /// Error of every terminal task, `None` where the task succeeded.
    pub fn all_errors(&self) -> Vec<Option<String>> {
        self.run.string_all_errors()
    }

    /// Inputs as compact JSON text, or [`INPUT_RETRIEVAL_ERROR`].
    pub fn inputs(&self) -> String {
        match self.run.inputs.to_compact_string() {
            Ok(text) => text,
            Err(e) => {
                warn!(run_id = %self.run.id, error = %e, "failed to encode run inputs");
                INPUT_RETRIEVAL_ERROR.to_string()
            }
        }
    }

    /// DOT source of the pipeline definition, verbatim. Empty if the
    /// definition cannot be loaded.
    pub fn observation_source(&self) -> String {
        match self.relations.observation_source(&self.run) {
            Ok(source) => source,
            Err(e) => {
                warn!(run_id = %self.run.id, error = %e, "failed to load observation source");
                String::new()
            }
        }
    }

    /// Task run views in execution order. Empty if none exist or they
    /// cannot be loaded.
    pub fn task_runs(&self) -> Vec<TaskRunView> {
        match self.relations.task_runs(&self.run) {
            Ok(task_runs) => new_task_run_views(task_runs),
            Err(e) => {
                warn!(run_id = %self.run.id, error = %e, "failed to load task runs");
                Vec::new()
            }
        }
    }

    /// When the run was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.run.created_at
    }

    /// Finish time, or [`zero_time`](crate::zero_time) while the run is
    /// unfinished.
    pub fn finished_at(&self) -> DateTime<Utc> {
        value_or_zero(self.run.finished_at)
    }

    /// Resolve every field into a response body.
    pub fn to_response(&self) -> RunResponse {
        RunResponse {
            id: self.id(),
            pipeline_spec_id: self.pipeline_spec_id(),
            status: self.status(),
            outputs: self.outputs(),
            all_errors: self.all_errors(),
            fatal_errors: self.fatal_errors(),
            inputs: self.inputs(),
            observation_source: self.observation_source(),
            task_runs: self.task_runs().iter().map(TaskRunView::to_response).collect(),
            created_at: self.created_at(),
            finished_at: self.finished_at(),
        }
    }
}

impl fmt::Debug for RunView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunView")
            .field("run", &self.run)
            .finish_non_exhaustive()
    }
}

/// Wrap runs in views, preserving order.
pub fn new_run_views(runs: impl IntoIterator<Item = Run>) -> Vec<RunView> {
    runs.into_iter().map(RunView::new).collect()
}

/// Wrap runs in views sharing one relation loader.
pub fn new_run_views_with(
    runs: impl IntoIterator<Item = Run>,
    relations: Arc<dyn RunRelations>,
) -> Vec<RunView> {
    runs.into_iter()
        .map(|run| RunView::with_relations(run, Arc::clone(&relations)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{zero_time, ViewError};
    use runview_core::{
        JsonColumn, NullJson, PipelineSpec, PipelineSpecId, RunId, TaskRun,
    };
    use serde_json::json;
    use std::collections::HashMap;

    fn run() -> Run {
        Run::new(RunId::new(1), PipelineSpecId::new(42))
    }

    #[test]
    fn test_zero_value_run_resolves_every_field() {
        let view = RunView::new(Run::default());

        assert_eq!(view.id().as_str(), "0");
        assert_eq!(view.pipeline_spec_id().as_str(), "0");
        assert_eq!(view.status(), RunState::Running);
        assert!(!view.has_errors());
        assert_eq!(view.outputs(), vec![Some(OUTPUT_RETRIEVAL_ERROR.to_string())]);
        assert!(view.all_errors().is_empty());
        assert!(view.fatal_errors().is_empty());
        assert_eq!(view.inputs(), "null");
        assert_eq!(view.observation_source(), "");
        assert!(view.task_runs().is_empty());
        assert_eq!(view.created_at(), DateTime::<Utc>::default());
        assert_eq!(view.finished_at(), zero_time());
    }

    #[test]
    fn test_outputs_invalid_returns_sentinel() {
        let mut r = run();
        // Payload is ignored while the column is unset.
        r.outputs = NullJson {
            valid: false,
            val: JsonColumn::from_value(&json!(["ignored"])),
        };
        assert_eq!(
            RunView::new(r).outputs(),
            vec![Some("error: unable to retrieve outputs".to_string())]
        );
    }

    #[test]
    fn test_outputs_decode_failure_returns_message() {
        let mut r = run();
        r.outputs = NullJson::from_value(&json!("not a list"));
        assert_eq!(
            RunView::new(r).outputs(),
            vec![Some("unable to process output type string".to_string())]
        );

        let mut r = run();
        r.outputs = NullJson::from_raw("[1,");
        let expected = r.string_outputs().unwrap_err().to_string();
        let outputs = RunView::new(r).outputs();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_outputs_decoded_verbatim() {
        let mut r = run();
        r.outputs = NullJson::from_value(&json!(["100", null, 3]));
        assert_eq!(
            RunView::new(r).outputs(),
            vec![Some("100".to_string()), None, Some("3".to_string())]
        );
    }

    #[test]
    fn test_fatal_errors_match_all_errors() {
        let mut r = run();
        r.all_errors = vec![None, Some("timeout".to_string()), None];
        r.fatal_errors = vec![Some("timeout".to_string())];

        let view = RunView::new(r);
        assert_eq!(view.all_errors(), vec![None, Some("timeout".to_string()), None]);
        assert_eq!(view.fatal_errors(), view.all_errors());
        assert!(view.has_errors());
    }

    #[test]
    fn test_inputs_round_trip() {
        let inputs = json!({"jobRun": {"meta": {"id": 3}}, "values": [1, "a", null]});
        let mut r = run();
        r.inputs = JsonColumn::new(serde_json::to_string_pretty(&inputs).unwrap());

        let text = RunView::new(r).inputs();
        assert!(!text.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, inputs);
    }

    #[test]
    fn test_large_numbers_survive_inputs_and_outputs() {
        let mut r = run();
        r.inputs = JsonColumn::new(r#"{"amount":100000000000000000000000}"#);
        r.outputs = NullJson::from_raw("[123456789012345678901234567890]");

        let view = RunView::new(r);
        assert_eq!(view.inputs(), r#"{"amount":100000000000000000000000}"#);
        assert_eq!(
            view.outputs(),
            vec![Some("123456789012345678901234567890".to_string())]
        );
    }

    #[test]
    fn test_inputs_malformed_returns_sentinel() {
        let mut r = run();
        r.inputs = JsonColumn::new("{\"a\":");
        assert_eq!(RunView::new(r).inputs(), "error: unable to retrieve inputs");
    }

    #[test]
    fn test_pipeline_spec_id() {
        assert_eq!(RunView::new(run()).pipeline_spec_id().as_str(), "42");

        let big = Run::new(RunId::new(1), PipelineSpecId::new(5_000_000_000));
        assert_eq!(RunView::new(big).pipeline_spec_id().as_str(), "5000000000");
    }

    #[test]
    fn test_observation_source_verbatim() {
        let source = "\n  fetch [type=http];\n  parse [type=jsonparse];\n  fetch -> parse\n";
        let r = run().with_pipeline_spec(PipelineSpec::new(PipelineSpecId::new(42), source));
        assert_eq!(RunView::new(r).observation_source(), source);
    }

    #[test]
    fn test_task_runs_preserve_order() {
        let r = run()
            .with_task_run(TaskRun::new(RunId::new(1), "http", "fetch"))
            .with_task_run(TaskRun::new(RunId::new(1), "jsonparse", "parse"))
            .with_task_run(TaskRun::new(RunId::new(1), "multiply", "multiply"));

        let views = RunView::new(r).task_runs();
        let dot_ids: Vec<&str> = views.iter().map(TaskRunView::dot_id).collect();
        assert_eq!(dot_ids, vec!["fetch", "parse", "multiply"]);
    }

    #[test]
    fn test_finished_at() {
        assert_eq!(RunView::new(run()).finished_at(), zero_time());

        let finished = Utc::now();
        let mut r = run();
        r.finished_at = Some(finished);
        assert_eq!(RunView::new(r).finished_at(), finished);
    }

    /// Relations fetched from a request-scoped cache instead of the record.
    struct Batched {
        sources: HashMap<RunId, String>,
        task_runs: HashMap<RunId, Vec<TaskRun>>,
    }

    impl RunRelations for Batched {
        fn observation_source(&self, run: &Run) -> Result<String, ViewError> {
            self.sources
                .get(&run.id)
                .cloned()
                .ok_or(ViewError::RelationNotLoaded("pipeline_spec"))
        }

        fn task_runs(&self, run: &Run) -> Result<Vec<TaskRun>, ViewError> {
            Ok(self.task_runs.get(&run.id).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_swapped_relations_keep_contract() {
        let loader = Batched {
            sources: HashMap::from([(RunId::new(1), "a -> b".to_string())]),
            task_runs: HashMap::from([(
                RunId::new(1),
                vec![TaskRun::new(RunId::new(1), "http", "a")],
            )]),
        };
        let views = new_run_views_with(
            vec![run(), Run::new(RunId::new(2), PipelineSpecId::new(42))],
            Arc::new(loader),
        );

        assert_eq!(views[0].observation_source(), "a -> b");
        assert_eq!(views[0].task_runs().len(), 1);
        assert_eq!(views[1].observation_source(), "");
        assert!(views[1].task_runs().is_empty());
    }

    struct Unavailable;

    impl RunRelations for Unavailable {
        fn observation_source(&self, _run: &Run) -> Result<String, ViewError> {
            Err(ViewError::LoadFailed {
                relation: "pipeline_spec",
                reason: "connection reset".to_string(),
            })
        }

        fn task_runs(&self, _run: &Run) -> Result<Vec<TaskRun>, ViewError> {
            Err(ViewError::LoadFailed {
                relation: "task_runs",
                reason: "connection reset".to_string(),
            })
        }
    }

    #[test]
    fn test_relation_failure_degrades() {
        let r = run().with_task_run(TaskRun::new(RunId::new(1), "http", "a"));
        let view = RunView::with_relations(r, Arc::new(Unavailable));

        assert_eq!(view.observation_source(), "");
        assert!(view.task_runs().is_empty());
        assert_eq!(view.pipeline_spec_id().as_str(), "42");
    }

    #[test]
    fn test_new_run_views() {
        assert!(new_run_views(Vec::new()).is_empty());

        let views = new_run_views((1..=3).map(|i| Run::new(RunId::new(i), PipelineSpecId::new(1))));
        let ids: Vec<String> = views.iter().map(|v| v.id().into_inner()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_response_json_shape() {
        let mut r = run()
            .with_pipeline_spec(PipelineSpec::new(PipelineSpecId::new(42), "a"))
            .with_task_run(TaskRun::new(RunId::new(1), "http", "a"));
        r.state = RunState::Completed;
        r.outputs = NullJson::from_value(&json!(["ok"]));
        r.all_errors = vec![None];

        let body = serde_json::to_value(RunView::new(r).to_response()).unwrap();
        assert_eq!(body["id"], "1");
        assert_eq!(body["pipelineSpecID"], "42");
        assert_eq!(body["status"], "completed");
        assert_eq!(body["outputs"], json!(["ok"]));
        assert_eq!(body["allErrors"], json!([null]));
        assert_eq!(body["fatalErrors"], json!([null]));
        assert_eq!(body["inputs"], "null");
        assert_eq!(body["observationSource"], "a");
        assert_eq!(body["taskRuns"][0]["dotID"], "a");
        assert_eq!(body["taskRuns"][0]["type"], "http");
        assert_eq!(body["finishedAt"], "0001-01-01T00:00:00Z");
    }

    #[test]
    fn test_views_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RunView>();
        assert_send_sync::<TaskRunView>();
    }
}
