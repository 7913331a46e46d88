//! Shared utility functions for output formatting

use std::path::MAIN_SEPARATOR;

use crate::size::format_size;
use crate::tree::{DirectoryNode, FileEntry, RankedItem};

/// Tab stops used when measuring a name field.
pub const TAB_WIDTH: usize = 8;

/// Calculate the prefix handed down to the children of an entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Branch connector for an entry; the root has none.
pub fn connector(is_last: bool, is_root: bool) -> &'static str {
    if is_root {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    }
}

/// Column reached after printing `s` from column 0, with tabs expanded.
/// Counts characters, not bytes.
pub fn display_width(s: &str) -> usize {
    s.chars().fold(0, |col, c| {
        if c == '\t' {
            (col / TAB_WIDTH + 1) * TAB_WIDTH
        } else {
            col + 1
        }
    })
}

/// Directory name with a single trailing slash.
pub fn dir_label(name: &str) -> String {
    if name.ends_with('/') || name.ends_with(MAIN_SEPARATOR) {
        name.to_string()
    } else {
        format!("{}/", name)
    }
}

pub fn dir_annotation(dir: &DirectoryNode) -> String {
    format!(
        "{}, {} dir, {} files",
        format_size(dir.total_size),
        dir.subdir_count,
        dir.file_count
    )
}

pub fn file_annotation(file: &FileEntry) -> String {
    let kind = if file.extension.is_empty() {
        "file"
    } else {
        file.extension.as_str()
    };
    format!("{} - {} file", format_size(file.size), kind)
}

pub fn top_files_header(k: usize) -> String {
    format!("Top {} files:", k)
}

pub fn top_dirs_header(k: usize) -> String {
    format!("Top {} directories:", k)
}

/// One line of a top-K list. `rank` starts at 1.
pub fn ranked_line(rank: usize, item: &RankedItem) -> String {
    format!(
        "{}. {} - {}",
        rank,
        item.path.display(),
        format_size(item.size)
    )
}
