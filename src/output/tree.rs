//! Tree formatter for the documentation block
//!
//! This module provides `TreeFormatter` which renders a `TreeNode` into
//! connector-prefixed lines, one per visible entry.

use crate::tree::TreeNode;

const TEE: &str = "├── ";
const CORNER: &str = "└── ";
const BAR_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Separator between a file name and its docstring.
const DOCSTRING_SEPARATOR: &str = " - ";

/// Formatter for buffered tree output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the children of `root`; the root itself is not printed.
    pub fn format(&self, root: &TreeNode) -> String {
        let mut output = String::new();
        self.format_children(root.children(), &mut output, "");
        output
    }

    fn format_children(&self, children: &[TreeNode], output: &mut String, prefix: &str) {
        let last = children.len().saturating_sub(1);
        for (i, child) in children.iter().enumerate() {
            self.format_node(child, output, prefix, i == last);
        }
    }

    fn format_node(&self, node: &TreeNode, output: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { CORNER } else { TEE };
        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(node.name());

        match node {
            TreeNode::File { docstring, .. } => {
                if let Some(doc) = docstring {
                    output.push_str(DOCSTRING_SEPARATOR);
                    output.push_str(doc);
                }
                output.push('\n');
            }
            TreeNode::Dir { children, .. } => {
                output.push_str("/\n");
                let child_prefix = child_prefix(prefix, is_last);
                self.format_children(children, output, &child_prefix);
            }
        }
    }
}

/// Calculate the prefix for child entries
fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, BLANK_INDENT)
    } else {
        format!("{}{}", current_prefix, BAR_INDENT)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn file(name: &str, docstring: Option<&str>) -> TreeNode {
        TreeNode::File {
            name: name.to_string(),
            path: PathBuf::from(name),
            docstring: docstring.map(str::to_string),
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode::Dir {
            name: name.to_string(),
            path: PathBuf::from(name),
            children,
        }
    }

    #[test]
    fn test_empty_root_renders_nothing() {
        assert_eq!(TreeFormatter::new().format(&dir(".", vec![])), "");
    }

    #[test]
    fn test_single_entry_uses_corner() {
        let root = dir(".", vec![file("main.py", None)]);
        assert_eq!(TreeFormatter::new().format(&root), "└── main.py\n");
    }

    #[test]
    fn test_nested_layout() {
        let root = dir(
            "project",
            vec![
                dir(
                    "pkg",
                    vec![
                        file("__init__.py", None),
                        dir("sub", vec![file("deep.py", Some("Deep module."))]),
                    ],
                ),
                dir("empty", vec![]),
                file("setup.py", Some("Setup script.")),
            ],
        );

        let expected = "\
├── pkg/
│   ├── __init__.py
│   └── sub/
│       └── deep.py - Deep module.
├── empty/
└── setup.py - Setup script.
";
        assert_eq!(TreeFormatter::new().format(&root), expected);
    }

    #[test]
    fn test_last_directory_uses_blank_continuation() {
        let root = dir(
            ".",
            vec![
                file("a.txt", None),
                dir("z", vec![file("x.txt", None), file("y.txt", None)]),
            ],
        );

        let expected = "\
├── a.txt
└── z/
    ├── x.txt
    └── y.txt
";
        assert_eq!(TreeFormatter::new().format(&root), expected);
    }

    #[test]
    fn test_multiline_docstring_kept_verbatim() {
        let root = dir(".", vec![file("m.py", Some("Line one.\nLine two."))]);
        assert_eq!(
            TreeFormatter::new().format(&root),
            "└── m.py - Line one.\nLine two.\n"
        );
    }
}
