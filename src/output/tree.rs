//! Tree formatter for the report
//!
//! Rendering is split in two pure passes over the same tree: `measure` finds the
//! widest name field, `render` emits the lines. `TreeFormatter` composes them.
//! Neither pass touches the filesystem or mutates the tree.

use crate::tree::{DirectoryNode, TreeNode};

use super::config::OutputConfig;
use super::utils::{
    connector, continuation_prefix, dir_annotation, dir_label, display_width, file_annotation,
};

/// Formatter for the tree section of a report.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, root: &DirectoryNode) -> Vec<String> {
        let column = self.config.align.then(|| measure(root));
        render(root, column)
    }
}

/// Widest name field in the tree, in tab-expanded columns.
pub fn measure(root: &DirectoryNode) -> usize {
    let mut widest = 0;
    visit_dir(root, "", true, true, &mut |field, _| {
        widest = widest.max(display_width(field));
    });
    widest
}

/// Render every line of the tree.
///
/// With `column`, each name field is padded so the `#` marker sits at
/// `column + 1`; `column` must be at least `measure(root)`. Without it the
/// annotation follows a tab.
pub fn render(root: &DirectoryNode, column: Option<usize>) -> Vec<String> {
    let mut lines = Vec::new();
    visit_dir(root, "", true, true, &mut |field, annotation| {
        let line = match column {
            Some(width) => {
                let pad = (width + 1).saturating_sub(display_width(field)).max(1);
                format!("{}{}# {}", field, " ".repeat(pad), annotation)
            }
            None => format!("{}\t# {}", field, annotation),
        };
        lines.push(line);
    });
    lines
}

/// Walk the tree in output order, handing each line's name field and
/// annotation to `emit`.
fn visit_dir<F>(dir: &DirectoryNode, prefix: &str, is_last: bool, is_root: bool, emit: &mut F)
where
    F: FnMut(&str, &str),
{
    let field = format!(
        "{}{}{}",
        prefix,
        connector(is_last, is_root),
        dir_label(&dir.name)
    );
    emit(&field, &dir_annotation(dir));

    let child_prefix = if is_root {
        String::new()
    } else {
        continuation_prefix(prefix, is_last)
    };

    for (i, child) in dir.children.iter().enumerate() {
        let child_is_last = i == dir.children.len() - 1;
        match child {
            TreeNode::Dir(sub) => visit_dir(sub, &child_prefix, child_is_last, false, emit),
            TreeNode::File(file) => {
                let field = format!(
                    "{}{}{}",
                    child_prefix,
                    connector(child_is_last, false),
                    file.name
                );
                emit(&field, &file_annotation(file));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::FileEntry;

    fn file(name: &str, size: u64, ext: &str) -> TreeNode {
        TreeNode::File(FileEntry {
            name: name.to_string(),
            size,
            extension: ext.to_string(),
        })
    }

    fn dir(name: &str, size: u64, children: Vec<TreeNode>) -> DirectoryNode {
        DirectoryNode {
            name: name.to_string(),
            total_size: size,
            subdir_count: children.iter().filter(|c| c.is_dir()).count() as u32,
            file_count: children.iter().filter(|c| !c.is_dir()).count() as u32,
            children,
            is_root: false,
        }
    }

    fn sample_tree() -> DirectoryNode {
        let mut root = dir(
            "/data",
            4096,
            vec![
                TreeNode::Dir(dir(
                    "projects",
                    3072,
                    vec![
                        TreeNode::Dir(dir("alpha", 2048, vec![file("core.bin", 2048, "bin")])),
                        file("notes.md", 1024, "md"),
                    ],
                )),
                TreeNode::Dir(dir("empty", 0, vec![])),
                file("Makefile", 1024, ""),
            ],
        );
        root.is_root = true;
        root
    }

    #[test]
    fn test_render_connectors_and_indentation() {
        let lines = render(&sample_tree(), None);
        assert_eq!(
            lines,
            vec![
                "/data/\t# 4.0 KB, 2 dir, 1 files",
                "├── projects/\t# 3.0 KB, 1 dir, 1 files",
                "│   ├── alpha/\t# 2.0 KB, 0 dir, 1 files",
                "│   │   └── core.bin\t# 2.0 KB - bin file",
                "│   └── notes.md\t# 1.0 KB - md file",
                "├── empty/\t# 0.0 B, 0 dir, 0 files",
                "└── Makefile\t# 1.0 KB - file file",
            ]
        );
    }

    #[test]
    fn test_last_branch_indents_with_spaces() {
        let mut root = dir(
            "r",
            3,
            vec![TreeNode::Dir(dir(
                "only",
                3,
                vec![TreeNode::Dir(dir("inner", 3, vec![file("x", 3, "")]))],
            ))],
        );
        root.is_root = true;

        let lines = render(&root, None);
        assert_eq!(lines[1], "└── only/\t# 3.0 B, 1 dir, 0 files");
        assert_eq!(lines[2], "    └── inner/\t# 3.0 B, 0 dir, 1 files");
        assert_eq!(lines[3], "        └── x\t# 3.0 B - file file");
    }

    #[test]
    fn test_measure_finds_widest_field() {
        // "│   │   └── core.bin" is 20 columns wide
        assert_eq!(measure(&sample_tree()), 20);
    }

    #[test]
    fn test_measure_root_only() {
        let mut root = dir("/tmp", 0, vec![]);
        root.is_root = true;
        assert_eq!(measure(&root), "/tmp/".len());
    }

    #[test]
    fn test_aligned_markers_share_one_column() {
        let tree = sample_tree();
        let width = measure(&tree);
        let lines = render(&tree, Some(width));

        for line in &lines {
            let field = line.split("# ").next().unwrap();
            assert_eq!(display_width(field), width + 1, "line: {:?}", line);
            assert!(!line.contains('\t'));
        }
        assert_eq!(lines[3], "│   │   └── core.bin # 2.0 KB - bin file");
    }

    #[test]
    fn test_aligned_with_tab_in_name() {
        let mut root = dir("r", 1, vec![file("odd\tname", 1, "")]);
        root.is_root = true;

        let width = measure(&root);
        // "└── odd" is 7 columns, the tab jumps to 8, then "name"
        assert_eq!(width, 12);
        for line in render(&root, Some(width)) {
            let marker = line.rfind("# ").unwrap();
            assert_eq!(display_width(&line[..marker]), 13);
        }
    }

    #[test]
    fn test_formatter_respects_align_flag() {
        let tree = sample_tree();
        let plain = TreeFormatter::new(OutputConfig::default()).format(&tree);
        assert_eq!(plain, render(&tree, None));

        let aligned = TreeFormatter::new(OutputConfig {
            align: true,
            ..Default::default()
        })
        .format(&tree);
        assert_eq!(aligned, render(&tree, Some(measure(&tree))));
    }

    #[test]
    fn test_render_does_not_mutate_tree() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = render(&tree, Some(measure(&tree)));
        assert_eq!(tree, before);
    }
}
