//! JSON output formatting

use serde::Serialize;

use crate::error::Result;
use crate::tree::{DirectoryNode, RankedItem};

/// Shape of `report.json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub root: &'a DirectoryNode,
    pub top_files: &'a [RankedItem],
    pub top_dirs: &'a [RankedItem],
}

/// Serialize a report as pretty-printed JSON.
pub fn render_json(report: &JsonReport<'_>) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
