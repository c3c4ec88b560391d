//! TreeWalker - reads a project directory into a `TreeNode`

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::docstring::{extract_docstring, is_docstring_candidate};
use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::node::TreeNode;

/// Tree walker that builds the full tree in memory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return it as a directory node.
    ///
    /// Any directory that cannot be listed aborts the walk.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        let mut ancestors = HashSet::new();
        ancestors.insert(canonical_dir(root)?);

        Ok(TreeNode::Dir {
            name,
            path: root.to_path_buf(),
            children: self.walk_dir(root, &mut ancestors)?,
        })
    }

    /// List `path`. `ancestors` holds the canonical form of every directory
    /// on the current branch, `path` included.
    fn walk_dir(&self, path: &Path, ancestors: &mut HashSet<PathBuf>) -> Result<Vec<TreeNode>> {
        let mut entries = fs::read_dir(path)
            .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
            .map_err(|source| Error::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
        entries.sort_by_key(|a| a.file_name());

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            if self.config.exclusions.is_excluded(&name) {
                trace!(name = %name, "excluded");
                continue;
            }

            let entry_path = entry.path();
            if entry_path.is_dir() {
                let canonical = canonical_dir(&entry_path)?;
                // A directory already on the branch is listed but not
                // entered again, so a link back to an ancestor cannot loop.
                let grandchildren = if ancestors.contains(&canonical) {
                    debug!(path = %entry_path.display(), "not descending into ancestor directory");
                    Vec::new()
                } else {
                    ancestors.insert(canonical.clone());
                    let result = self.walk_dir(&entry_path, ancestors);
                    ancestors.remove(&canonical);
                    result?
                };
                children.push(TreeNode::Dir {
                    name,
                    path: entry_path,
                    children: grandchildren,
                });
            } else {
                let docstring = if self.config.read_docstrings && is_docstring_candidate(&name) {
                    extract_docstring(&entry_path)
                } else {
                    None
                };
                children.push(TreeNode::File {
                    name,
                    path: entry_path,
                    docstring,
                });
            }
        }

        Ok(children)
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|source| Error::ReadDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::tree::ExclusionSet;

    fn add(dir: &TempDir, path: &str, content: &str) {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    fn names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name()).collect()
    }

    #[test]
    fn test_children_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        add(&dir, "zeta.txt", "");
        add(&dir, "Alpha.txt", "");
        add(&dir, "beta/inner.txt", "");
        add(&dir, "_private.txt", "");

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        assert_eq!(
            names(tree.children()),
            vec!["Alpha.txt", "_private.txt", "beta", "zeta.txt"]
        );
    }

    #[test]
    fn test_default_exclusions_at_any_depth() {
        let dir = TempDir::new().unwrap();
        add(&dir, "src/app.py", "");
        add(&dir, "src/__pycache__/app.cpython-312.pyc", "");
        add(&dir, "node_modules/pkg/index.js", "");
        add(&dir, "src/nested/.DS_Store", "");

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        assert_eq!(names(tree.children()), vec!["src"]);
        let src = &tree.children()[0];
        assert_eq!(names(src.children()), vec!["app.py", "nested"]);
        assert!(src.children()[1].children().is_empty());
    }

    #[test]
    fn test_configured_exclusions_are_exact() {
        let dir = TempDir::new().unwrap();
        add(&dir, "build/out.o", "");
        add(&dir, "build-tools/run.sh", "");
        add(&dir, "rebuild", "");

        let config = WalkerConfig {
            exclusions: ExclusionSet::with_defaults(vec!["build".to_string()]),
            read_docstrings: true,
        };
        let tree = TreeWalker::new(config).walk(dir.path()).unwrap();
        assert_eq!(names(tree.children()), vec!["build-tools", "rebuild"]);
    }

    #[test]
    fn test_docstrings_only_for_py_files() {
        let dir = TempDir::new().unwrap();
        add(&dir, "app.py", "\"\"\"App module.\"\"\"\n");
        add(&dir, "notes.txt", "\"\"\"Not python.\"\"\"\n");
        add(&dir, "plain.py", "import os\n");

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        let docs: Vec<Option<&str>> = tree
            .children()
            .iter()
            .map(|n| match n {
                TreeNode::File { docstring, .. } => docstring.as_deref(),
                TreeNode::Dir { .. } => None,
            })
            .collect();
        assert_eq!(docs, vec![Some("App module."), None, None]);
    }

    #[test]
    fn test_docstrings_disabled() {
        let dir = TempDir::new().unwrap();
        add(&dir, "app.py", "\"\"\"App module.\"\"\"\n");

        let config = WalkerConfig {
            read_docstrings: false,
            ..WalkerConfig::default()
        };
        let tree = TreeWalker::new(config).walk(dir.path()).unwrap();
        assert!(matches!(
            &tree.children()[0],
            TreeNode::File { docstring: None, .. }
        ));
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let err = TreeWalker::new(WalkerConfig::default())
            .walk(&missing)
            .unwrap_err();
        assert!(matches!(err, Error::ReadDir { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_counts() {
        let dir = TempDir::new().unwrap();
        add(&dir, "a/b/c.txt", "");
        add(&dir, "a/d.txt", "");
        add(&dir, "e.txt", "");

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        assert_eq!(tree.counts(), (2, 3));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_followed_until_ancestor() {
        let dir = TempDir::new().unwrap();
        add(&dir, "real/file.txt", "");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        std::os::unix::fs::symlink("..", dir.path().join("real").join("up")).unwrap();

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        assert_eq!(names(tree.children()), vec!["link", "real"]);

        // link -> real is not an ancestor of the root, so it is entered
        let link = &tree.children()[0];
        assert!(link.is_dir());
        assert_eq!(names(link.children()), vec!["file.txt", "up"]);
        // up -> root is on the current branch, so it stays empty
        assert!(link.children()[1].is_dir());
        assert!(link.children()[1].children().is_empty());

        let real = &tree.children()[1];
        assert_eq!(names(real.children()), vec!["file.txt", "up"]);
        assert!(real.children()[1].children().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_outside_directory_is_walked() {
        let project = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        add(&project, "main.py", "");
        add(&shared, "shared.py", "\"\"\"Shared.\"\"\"\n");
        std::os::unix::fs::symlink(shared.path(), project.path().join("vendor")).unwrap();

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(project.path())
            .unwrap();
        assert_eq!(names(tree.children()), vec!["main.py", "vendor"]);
        let vendor = &tree.children()[1];
        assert!(matches!(
            vendor.children(),
            [TreeNode::File { name, docstring: Some(doc), .. }]
                if name == "shared.py" && doc == "Shared."
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_sibling_links_to_same_directory_both_walked() {
        let dir = TempDir::new().unwrap();
        add(&dir, "real/file.txt", "");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("a_link")).unwrap();

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        assert_eq!(names(tree.children()), vec!["a_link", "real"]);
        assert_eq!(names(tree.children()[0].children()), vec!["file.txt"]);
        assert_eq!(names(tree.children()[1].children()), vec!["file.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_listed_as_file() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink("nowhere.py", dir.path().join("dangling.py")).unwrap();

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        assert!(matches!(
            &tree.children()[0],
            TreeNode::File { name, docstring: None, .. } if name == "dangling.py"
        ));
    }
}
