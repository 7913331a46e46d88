//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Files are created with an exact byte size so tests can assert on sizes.
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of `size` zero bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![0u8; size]).expect("Failed to write file");
        full_path
    }

    /// Add a sparse file of `size` bytes without writing its contents.
    ///
    /// Useful for the hundreds-of-megabytes scenarios.
    pub fn add_sparse_file(&self, path: &str, size: u64) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let file = fs::File::create(&full_path).expect("Failed to create file");
        file.set_len(size).expect("Failed to set file length");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
