//! View errors.
//!
//! These never reach the API layer; accessors log them and substitute a
//! value.

use thiserror::Error;

/// Errors raised while resolving a view field.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Relation was not materialized on the record.
    #[error("relation not loaded: {0}")]
    RelationNotLoaded(&'static str),

    /// Deferred relation fetch failed.
    #[error("failed to load {relation}: {reason}")]
    LoadFailed {
        relation: &'static str,
        reason: String,
    },
}
