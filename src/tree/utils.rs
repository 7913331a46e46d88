//! Shared utility functions for tree walking

use std::path::Path;

/// Name shown for a node: the path as given for the root, the basename otherwise.
pub fn display_name(path: &Path, is_root: bool) -> String {
    if is_root {
        return path.to_string_lossy().to_string();
    }
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Lowercase extension of a file name, or an empty string.
///
/// Dotfiles such as `.bashrc` have no extension.
pub fn file_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Run `op` on a rayon pool sized by `workers`.
///
/// 0 uses rayon's global pool. Any other value builds a dedicated pool; if that
/// fails the global pool is used instead.
pub fn with_workers<T, F>(workers: usize, op: F) -> T
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    if workers == 0 {
        return op();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(op),
        Err(err) => {
            tracing::warn!(workers, error = %err, "falling back to the global thread pool");
            op()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_name_root_keeps_full_path() {
        let path = PathBuf::from("/var/log");
        assert_eq!(display_name(&path, true), "/var/log");
        assert_eq!(display_name(&path, false), "log");
    }

    #[test]
    fn test_display_name_without_file_name() {
        assert_eq!(display_name(Path::new("/"), false), "/");
        assert_eq!(display_name(Path::new(".."), false), "..");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("big.LOG"), "log");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("Makefile"), "");
        assert_eq!(file_extension(".bashrc"), "");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_with_workers_runs_op() {
        use rayon::prelude::*;

        for workers in [0, 1, 3] {
            let sum: u64 = with_workers(workers, || (1..=100u64).into_par_iter().sum());
            assert_eq!(sum, 5050);
        }
    }
}
