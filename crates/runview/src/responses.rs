//! API response bodies.
//!
//! Fully resolved views, ready for serialization. Building one cannot fail.

use chrono::{DateTime, Utc};
use serde::Serialize;

use runview_core::RunState;

use crate::ApiId;

// ============================================================================
// Run
// ============================================================================

/// Response for a single run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub id: ApiId,
    #[serde(rename = "pipelineSpecID")]
    pub pipeline_spec_id: ApiId,
    pub status: RunState,
    pub outputs: Vec<Option<String>>,
    pub all_errors: Vec<Option<String>>,
    pub fatal_errors: Vec<Option<String>>,
    pub inputs: String,
    pub observation_source: String,
    pub task_runs: Vec<TaskRunResponse>,
    pub created_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

// ============================================================================
// Task run
// ============================================================================

/// Response for a single task run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunResponse {
    pub id: ApiId,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(rename = "dotID")]
    pub dot_id: String,
    pub output: String,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
