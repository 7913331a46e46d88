//! Summary tree types shared by the builder, the renderers and JSON output

use serde::Serialize;

/// A retained file in the summary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    /// Lowercase suffix after the last '.', or empty.
    pub extension: String,
}

/// A directory in the summary tree.
///
/// `total_size`, `subdir_count` and `file_count` describe the whole directory
/// on disk, not just the children retained for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    pub name: String,
    pub total_size: u64,
    pub subdir_count: u32,
    pub file_count: u32,
    /// Retained directories first, then retained files.
    pub children: Vec<TreeNode>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_root: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Dir(DirectoryNode),
    File(FileEntry),
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Dir(dir) => &dir.name,
            TreeNode::File(file) => &file.name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            TreeNode::Dir(dir) => dir.total_size,
            TreeNode::File(file) => file.size,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir(_))
    }
}

impl DirectoryNode {
    pub fn dirs(&self) -> impl Iterator<Item = &DirectoryNode> {
        self.children.iter().filter_map(|c| match c {
            TreeNode::Dir(d) => Some(d),
            TreeNode::File(_) => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.children.iter().filter_map(|c| match c {
            TreeNode::File(f) => Some(f),
            TreeNode::Dir(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirectoryNode {
        DirectoryNode {
            name: "/data".to_string(),
            total_size: 300,
            subdir_count: 1,
            file_count: 2,
            children: vec![
                TreeNode::Dir(DirectoryNode {
                    name: "logs".to_string(),
                    total_size: 200,
                    subdir_count: 0,
                    file_count: 1,
                    children: Vec::new(),
                    is_root: false,
                }),
                TreeNode::File(FileEntry {
                    name: "notes.md".to_string(),
                    size: 100,
                    extension: "md".to_string(),
                }),
            ],
            is_root: true,
        }
    }

    #[test]
    fn test_children_partition() {
        let root = sample();
        assert_eq!(root.dirs().count(), 1);
        assert_eq!(root.files().count(), 1);
        assert_eq!(root.children[0].name(), "logs");
        assert_eq!(root.children[1].size(), 100);
        assert!(root.children[0].is_dir());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["is_root"], true);
        assert_eq!(json["children"][0]["type"], "dir");
        assert_eq!(json["children"][0]["total_size"], 200);
        assert!(json["children"][0].get("is_root").is_none());
        assert_eq!(json["children"][1]["type"], "file");
        assert_eq!(json["children"][1]["extension"], "md");
    }
}
