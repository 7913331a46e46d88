//! Directory traversal and size aggregation
//!
//! This module provides the two walks behind a report:
//!
//! - `TreeBuilder`: depth-limited summary tree, top 5 subdirectories and files per level
//! - `TopKScanner`: unbounded walk collecting the largest files and directories overall
//!
//! Both size directories through `aggregate`, and both reach the filesystem only
//! through the `Option`-returning primitives in `listing`.

mod aggregate;
mod builder;
mod config;
mod listing;
mod node;
mod top_k;
mod utils;

// Re-export public types
pub use aggregate::{SizeSummary, aggregate, try_aggregate};
pub use builder::{MAX_DIR_CHILDREN, MAX_FILE_CHILDREN, TreeBuilder};
pub use config::{DEFAULT_DEPTH, DEFAULT_TOP_DIRS, DEFAULT_TOP_FILES, ScanConfig};
pub use listing::{DirItem, EntryKind, file_size, list_dir};
pub use node::{DirectoryNode, FileEntry, TreeNode};
pub use top_k::{RankedItem, TopK, TopKScanner};
pub use utils::{display_name, file_extension};
