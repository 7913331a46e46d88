//! Report assembly and writing
//!
//! A report is the summary tree followed by the two top-K lists. It is built
//! completely in memory and written in one step, so a failed run never leaves
//! a partial report behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};
use crate::output::{JsonReport, OutputConfig, TreeFormatter, ranked_line, render_json};
use crate::output::{top_dirs_header, top_files_header};
use crate::tree::{DirectoryNode, RankedItem, ScanConfig, TopK, TopKScanner, TreeBuilder};

/// File name of the text report, created in the working directory.
pub const REPORT_FILE: &str = "report.txt";
/// File name of the JSON report.
pub const JSON_REPORT_FILE: &str = "report.json";

/// A finished scan: the summary tree plus the top-K lists.
#[derive(Debug, Clone)]
pub struct Report {
    pub root: DirectoryNode,
    pub top: TopK,
    top_files: usize,
    top_dirs: usize,
}

impl Report {
    /// Run both walks over `config.root`: the top-K scan first, then the
    /// bounded tree. Fails with `InvalidRoot` if the root cannot be listed.
    pub fn generate(config: &ScanConfig) -> Result<Self> {
        let top = TopKScanner::new(config.clone()).scan(&config.root);
        info!(
            files = top.files.len(),
            dirs = top.dirs.len(),
            "top-k scan finished"
        );

        let root = TreeBuilder::new(config.clone())
            .build(&config.root)
            .ok_or_else(|| Error::InvalidRoot {
                path: config.root.clone(),
            })?;
        info!(total_size = root.total_size, "summary tree built");

        Ok(Self {
            root,
            top,
            top_files: config.top_files,
            top_dirs: config.top_dirs,
        })
    }

    /// The text report: tree, blank line, top files, blank line, top directories.
    pub fn to_text(&self, config: &OutputConfig) -> String {
        let mut out = String::new();
        for line in TreeFormatter::new(config.clone()).format(&self.root) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        push_ranked_list(&mut out, &top_files_header(self.top_files), &self.top.files);
        out.push('\n');
        push_ranked_list(&mut out, &top_dirs_header(self.top_dirs), &self.top.dirs);
        out
    }

    pub fn to_json(&self) -> Result<String> {
        render_json(&JsonReport {
            root: &self.root,
            top_files: &self.top.files,
            top_dirs: &self.top.dirs,
        })
    }

    pub fn top_files(&self) -> usize {
        self.top_files
    }

    pub fn top_dirs(&self) -> usize {
        self.top_dirs
    }
}

fn push_ranked_list(out: &mut String, header: &str, items: &[RankedItem]) {
    out.push_str(header);
    out.push('\n');
    for (i, item) in items.iter().enumerate() {
        out.push_str(&ranked_line(i + 1, item));
        out.push('\n');
    }
}

/// Fail with `InvalidRoot` unless `path` is an existing directory.
pub fn validate_root(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidRoot {
            path: path.to_path_buf(),
        })
    }
}

/// Write `contents` to `path` all at once.
///
/// The data goes to a temporary file next to `path` which then replaces it,
/// so readers never see a half-written report.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| Error::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(contents.as_bytes()).map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
