//! Name-based exclusion of directory entries

use std::collections::HashSet;

/// Names skipped in every project, at any depth.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "venv",
    "__pycache__",
    ".git",
    ".env",
    ".venv",
    ".idea",
    ".vscode",
    ".DS_Store",
    ".gitignore",
    "migrations",
    "db.sqlite3",
    ".log",
    ".jar",
    "node_modules",
    "dist",
];

/// Set of entry names left out of the tree.
///
/// Matching is exact name equality: `dist` excludes a `dist` entry but not
/// `dist-old`, and `.log` excludes only an entry literally named `.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    /// The built-in defaults plus `extra`.
    pub fn with_defaults<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut names: HashSet<String> =
            DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect();
        names.extend(extra);
        Self(names)
    }

    /// Check if an entry name should be skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}
