//! TreeBuilder - builds the depth-limited summary tree
//!
//! Every level keeps only its heaviest subdirectories and files. Aggregates are
//! taken from the full subtree before anything is pruned, so a node's totals
//! never depend on which of its children made the cut.

use std::path::Path;

use rayon::prelude::*;

use super::aggregate::try_aggregate;
use super::config::ScanConfig;
use super::listing::{DirItem, file_size, list_dir};
use super::node::{DirectoryNode, FileEntry, TreeNode};
use super::utils::{display_name, file_extension, with_workers};

/// Most subdirectories kept per level.
pub const MAX_DIR_CHILDREN: usize = 5;
/// Most files kept per level.
pub const MAX_FILE_CHILDREN: usize = 5;

pub struct TreeBuilder {
    config: ScanConfig,
}

impl TreeBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Build the summary tree for `root`, or `None` if `root` cannot be listed.
    pub fn build(&self, root: &Path) -> Option<DirectoryNode> {
        with_workers(self.config.parallel_workers, || self.build_dir(root, 0))
    }

    fn build_dir(&self, path: &Path, depth: usize) -> Option<DirectoryNode> {
        if depth > self.config.max_depth {
            return None;
        }

        let summary = try_aggregate(path)?;
        let mut node = DirectoryNode {
            name: display_name(path, depth == 0),
            total_size: summary.total_size,
            subdir_count: summary.subdir_count,
            file_count: summary.file_count,
            children: Vec::new(),
            is_root: depth == 0,
        };

        // At max depth, size the directory but don't descend
        if depth == self.config.max_depth {
            return Some(node);
        }

        let (dirs, files): (Vec<DirItem>, Vec<DirItem>) = list_dir(path)
            .unwrap_or_default()
            .into_iter()
            .partition(DirItem::is_dir);

        let heaviest = self.heaviest_dirs(dirs);
        node.children = heaviest
            .par_iter()
            .filter_map(|item| self.build_dir(&item.path, depth + 1))
            .map(TreeNode::Dir)
            .collect();
        node.children
            .extend(self.heaviest_files(files).into_iter().map(TreeNode::File));

        Some(node)
    }

    /// Rank candidate directories by aggregate size and keep the top few.
    /// Directories that cannot be listed drop out of the ranking.
    fn heaviest_dirs(&self, dirs: Vec<DirItem>) -> Vec<DirItem> {
        let mut ranked: Vec<(DirItem, u64)> = dirs
            .into_par_iter()
            .filter_map(|item| {
                let size = try_aggregate(&item.path)?.total_size;
                Some((item, size))
            })
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(MAX_DIR_CHILDREN);
        ranked.into_iter().map(|(item, _)| item).collect()
    }

    /// Keep the largest files at or above the minimum size.
    fn heaviest_files(&self, files: Vec<DirItem>) -> Vec<FileEntry> {
        let mut ranked: Vec<FileEntry> = files
            .into_iter()
            .filter_map(|item| {
                let size = file_size(&item.path)?;
                (size >= self.config.min_file_size).then(|| FileEntry {
                    extension: file_extension(&item.name),
                    name: item.name,
                    size,
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.size.cmp(&a.size));
        ranked.truncate(MAX_FILE_CHILDREN);
        ranked
    }
}
