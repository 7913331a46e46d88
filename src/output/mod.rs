//! Report formatting and display
//!
//! This module provides the renderers for a finished scan:
//! - Tree section of the text report (plain or column-aligned)
//! - Colored console echo of the top-K lists
//! - JSON report
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared helpers (prefixes, widths, annotations, list lines)
//! - `tree` - `measure` / `render` and the composing `TreeFormatter`
//! - `console` - Console output with colors
//! - `json` - JSON output

mod config;
mod console;
mod json;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use console::{print_top_lists, write_ranked_list};
pub use json::{JsonReport, render_json};
pub use tree::{TreeFormatter, measure, render};

// Re-export utility functions used by tests
pub use utils::{
    connector, continuation_prefix, dir_annotation, display_width, file_annotation, ranked_line,
    top_dirs_header, top_files_header,
};
