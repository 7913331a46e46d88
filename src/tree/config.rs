//! Configuration for a scan run

use std::path::PathBuf;

pub const DEFAULT_DEPTH: usize = 3;
pub const DEFAULT_TOP_FILES: usize = 10;
pub const DEFAULT_TOP_DIRS: usize = 10;

/// Everything a scan needs, built once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// Deepest level of the summary tree. The root is level 0.
    pub max_depth: usize,
    /// Files smaller than this never appear in the tree or the top files list.
    pub min_file_size: u64,
    pub top_files: usize,
    pub top_dirs: usize,
    /// Number of worker threads for sizing sibling directories.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential
    /// N = use N worker threads
    pub parallel_workers: usize,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: DEFAULT_DEPTH,
            min_file_size: 0,
            top_files: DEFAULT_TOP_FILES,
            top_dirs: DEFAULT_TOP_DIRS,
            parallel_workers: 0,
        }
    }
}
