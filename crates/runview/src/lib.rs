//! RunView
//!
//! Read-only API views over pipeline run records. A view wraps one stored
//! record and answers field queries for the API layer. Every accessor
//! returns a value for any record, however incomplete: absent values become
//! fixed sentinels and malformed values become their error message.
//!
//! ```
//! use runview::RunView;
//! use runview_core::{PipelineSpecId, Run, RunId};
//!
//! let view = RunView::new(Run::new(RunId::new(1), PipelineSpecId::new(42)));
//! assert_eq!(view.pipeline_spec_id().as_str(), "42");
//! assert_eq!(view.outputs(), vec![Some("error: unable to retrieve outputs".to_string())]);
//! ```

pub mod error;
pub mod id;
pub mod relations;
pub mod responses;
pub mod run;
pub mod task_run;
pub mod time;

pub use error::ViewError;
pub use id::ApiId;
pub use relations::{Preloaded, RunRelations};
pub use responses::{RunResponse, TaskRunResponse};
pub use run::{new_run_views, new_run_views_with, RunView, INPUT_RETRIEVAL_ERROR, OUTPUT_RETRIEVAL_ERROR};
pub use task_run::{new_task_run_views, TaskRunView, TASK_OUTPUT_RETRIEVAL_ERROR};
pub use time::zero_time;
