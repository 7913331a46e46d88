//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Colors for console output. The report file is always plain text.
    pub use_color: bool,
    /// Line up the annotation column of the tree.
    pub align: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            align: false,
        }
    }
}
