//! Recursive size aggregation for a whole subtree

use std::path::Path;

use serde::Serialize;

use super::listing::{file_size, list_dir};

/// Totals for everything below a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeSummary {
    /// Bytes of every readable file in the subtree.
    pub total_size: u64,
    /// Sum over every visited directory of its direct subdirectory count.
    pub subdir_count: u32,
    /// Sum over every visited directory of its direct non-directory count.
    pub file_count: u32,
}

/// Aggregate the subtree rooted at `path`.
///
/// Never fails: unreadable directories count as empty and unreadable files
/// add no bytes, so the result may be partial.
pub fn aggregate(path: &Path) -> SizeSummary {
    try_aggregate(path).unwrap_or_default()
}

/// Aggregate the subtree rooted at `path`, or `None` if `path` itself cannot
/// be listed.
pub fn try_aggregate(path: &Path) -> Option<SizeSummary> {
    let mut summary = SizeSummary::default();
    let mut pending = vec![list_dir(path)?];

    while let Some(items) = pending.pop() {
        for item in items {
            if item.is_dir() {
                summary.subdir_count = summary.subdir_count.saturating_add(1);
                if item.is_descendable() {
                    if let Some(children) = list_dir(&item.path) {
                        pending.push(children);
                    }
                }
            } else {
                summary.file_count = summary.file_count.saturating_add(1);
                if let Some(size) = file_size(&item.path) {
                    summary.total_size = summary.total_size.saturating_add(size);
                }
            }
        }
    }

    Some(summary)
}
