//! RunView Core Records
//!
//! This crate contains the pipeline execution records handed to the
//! presentation layer by the persistence layer. It has no dependencies on:
//! - Network/API transport
//! - Database drivers
//! - Logging
//!
//! Records here are read-only snapshots; nothing in this crate mutates a
//! stored run.

pub mod error;
pub mod ids;
pub mod json;
pub mod pipeline;
pub mod run;
pub mod status;
pub mod task_run;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::{PipelineSpecId, RunId, TaskRunId};
pub use json::{JsonColumn, NullJson};
pub use pipeline::PipelineSpec;
pub use run::Run;
pub use status::RunState;
pub use task_run::TaskRun;
