//! Sizetree - a disk usage report that shows only the heaviest branches

pub mod error;
pub mod output;
pub mod report;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{OutputConfig, TreeFormatter, print_top_lists};
pub use report::{JSON_REPORT_FILE, REPORT_FILE, Report, validate_root, write_report};
pub use size::{format_size, parse_size};
pub use tree::{
    DirectoryNode, FileEntry, RankedItem, ScanConfig, SizeSummary, TopK, TopKScanner, TreeBuilder,
    TreeNode, aggregate,
};
