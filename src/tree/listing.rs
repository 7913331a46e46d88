//! Filesystem primitives used by every traversal
//!
//! Each primitive answers "accessible" or "not accessible" through `Option`.
//! Callers match on it and skip; nothing here panics or aborts a walk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Kind of a directory entry, classified by what a symlink points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One direct child of a listed directory.
#[derive(Debug, Clone)]
pub struct DirItem {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Set for symlinks. Full walks never descend through a symlinked directory.
    pub is_symlink: bool,
}

impl DirItem {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Whether a recursive walk should enter this entry.
    pub fn is_descendable(&self) -> bool {
        self.is_dir() && !self.is_symlink
    }
}

/// List the direct children of `path` in OS listing order.
///
/// Returns `None` when the directory itself cannot be read. Entries that
/// vanish mid-listing are dropped.
pub fn list_dir(path: &Path) -> Option<Vec<DirItem>> {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable directory");
            return None;
        }
    };

    let items = entries
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping vanished entry");
                None
            }
        })
        .filter_map(|entry| {
            let file_type = entry.file_type().ok()?;
            let entry_path = entry.path();
            let is_symlink = file_type.is_symlink();
            let is_dir = if is_symlink {
                // Broken links fall through to File and fail later at stat time.
                fs::metadata(&entry_path).is_ok_and(|m| m.is_dir())
            } else {
                file_type.is_dir()
            };
            Some(DirItem {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry_path,
                kind: if is_dir { EntryKind::Dir } else { EntryKind::File },
                is_symlink,
            })
        })
        .collect();

    Some(items)
}

/// Size in bytes of the file at `path`, following symlinks.
pub fn file_size(path: &Path) -> Option<u64> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.len()),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_dir_classifies_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "abc").unwrap();

        let mut items = list_dir(dir.path()).unwrap();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "a.txt");
        assert_eq!(items[0].kind, EntryKind::File);
        assert_eq!(items[1].name, "sub");
        assert!(items[1].is_descendable());
    }

    #[test]
    fn test_list_dir_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(list_dir(&dir.path().join("missing")).is_none());
    }

    #[test]
    fn test_file_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("f.bin");
        fs::write(&path, vec![0u8; 1234]).unwrap();

        assert_eq!(file_size(&path), Some(1234));
        assert_eq!(file_size(&dir.path().join("gone")), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_take_target_kind() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        symlink("nowhere", dir.path().join("broken")).unwrap();

        let items = list_dir(dir.path()).unwrap();
        let link = items.iter().find(|i| i.name == "link").unwrap();
        assert!(link.is_dir());
        assert!(!link.is_descendable());

        let broken = items.iter().find(|i| i.name == "broken").unwrap();
        assert_eq!(broken.kind, EntryKind::File);
        assert_eq!(file_size(&broken.path), None);
    }
}
