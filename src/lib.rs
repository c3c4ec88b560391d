//! Structure generator - writes a project's directory tree, annotated with
//! Python module docstrings, into its documentation

pub mod config;
pub mod docstring;
pub mod error;
pub mod generate;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{CONFIG_FILES, Config, DEFAULT_OUTPUT_FILE};
pub use docstring::{extract_docstring, extract_docstring_from_str, is_docstring_candidate};
pub use error::{Error, Result};
pub use generate::{GenerateReport, generate, preview, render_tree};
pub use output::{TreeFormatter, WriteOutcome, render_document, write_document};
pub use tree::{DEFAULT_EXCLUDED, ExclusionSet, TreeNode, TreeWalker, WalkerConfig};
