//! Status of a pipeline Run.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a pipeline Run as recorded by the execution engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Run is executing tasks.
    #[default]
    Running,
    /// Run is waiting on an asynchronous task to resume it.
    Suspended,
    /// Run finished with at least one fatal error.
    Errored,
    /// Run finished without fatal errors.
    Completed,
}
