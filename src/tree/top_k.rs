//! TopKScanner - the globally largest files and directories
//!
//! Unlike the summary tree this walk has no depth limit. It visits every
//! directory once in top-down pre-order, records qualifying files as it goes,
//! then sizes each visited directory with a fresh aggregation.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use super::aggregate::aggregate;
use super::config::ScanConfig;
use super::listing::{file_size, list_dir};
use super::utils::with_workers;

/// A file or directory in a top-K list, identified by its full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub path: PathBuf,
    pub size: u64,
}

/// Result of a top-K scan. Both lists are sorted largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopK {
    pub files: Vec<RankedItem>,
    pub dirs: Vec<RankedItem>,
}

pub struct TopKScanner {
    config: ScanConfig,
}

impl TopKScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn scan(&self, root: &Path) -> TopK {
        let mut files = Vec::new();
        let mut dirs = Vec::new();
        self.walk(root, &mut files, &mut dirs);

        let dirs: Vec<RankedItem> = with_workers(self.config.parallel_workers, || {
            dirs.into_par_iter()
                .map(|path| {
                    let size = aggregate(&path).total_size;
                    RankedItem { path, size }
                })
                .collect()
        });

        TopK {
            files: take_largest(files, self.config.top_files),
            dirs: take_largest(dirs, self.config.top_dirs),
        }
    }

    /// Pre-order walk: this directory, its files, then each subdirectory.
    fn walk(&self, dir: &Path, files: &mut Vec<RankedItem>, dirs: &mut Vec<PathBuf>) {
        let Some(items) = list_dir(dir) else {
            return;
        };
        dirs.push(dir.to_path_buf());

        let mut subdirs = Vec::new();
        for item in items {
            if item.is_descendable() {
                subdirs.push(item.path);
            } else if !item.is_dir() {
                if let Some(size) = file_size(&item.path) {
                    if size >= self.config.min_file_size {
                        files.push(RankedItem {
                            path: item.path,
                            size,
                        });
                    }
                }
            }
        }

        for subdir in subdirs {
            self.walk(&subdir, files, dirs);
        }
    }
}

/// Stable sort largest first, then keep `k`. Ties stay in discovery order.
fn take_largest(mut items: Vec<RankedItem>, k: usize) -> Vec<RankedItem> {
    items.sort_by(|a, b| b.size.cmp(&a.size));
    items.truncate(k);
    items
}
