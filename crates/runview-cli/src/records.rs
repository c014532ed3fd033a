//! Reading run records and rendering responses.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use runview::{new_run_views, RunResponse, RunView};
use runview_core::Run;

use crate::error::CliError;

/// Run records as found in an input document.
#[derive(Debug)]
pub enum RunRecords {
    Many(Vec<Run>),
    One(Box<Run>),
}

/// Rendered responses, shaped like the input document.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    Many(Vec<RunResponse>),
    One(Box<RunResponse>),
}

/// Read the input document from `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
    }
}

/// Decode run records from a JSON document.
///
/// The document is read as a `Value` first: untagged enums buffer
/// arbitrary-precision numbers in a form the record ids cannot decode.
pub fn parse_records(text: &str) -> Result<RunRecords, CliError> {
    let doc: Value = serde_json::from_str(text).map_err(CliError::Decode)?;
    let records = match doc {
        Value::Array(_) => RunRecords::Many(serde_json::from_value(doc).map_err(CliError::Decode)?),
        _ => RunRecords::One(Box::new(
            serde_json::from_value(doc).map_err(CliError::Decode)?,
        )),
    };
    Ok(records)
}

/// Map records through their views.
pub fn render(records: RunRecords) -> Rendered {
    match records {
        RunRecords::One(run) => {
            debug!(run_id = %run.id, "rendering run");
            Rendered::One(Box::new(RunView::new(*run).to_response()))
        }
        RunRecords::Many(runs) => {
            info!(count = runs.len(), "rendering runs");
            Rendered::Many(
                new_run_views(runs)
                    .iter()
                    .map(RunView::to_response)
                    .collect(),
            )
        }
    }
}

/// Encode rendered responses as JSON text.
pub fn to_json(rendered: &Rendered, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(rendered)
    } else {
        serde_json::to_string(rendered)
    };
    text.map_err(CliError::Encode)
}
