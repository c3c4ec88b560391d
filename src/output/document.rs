//! Output document writing
//!
//! The rendered tree is wrapped in a fenced code block under an
//! `# Architecture` header. An existing document gets the section appended;
//! a missing one is created. Nothing is deduplicated, so each run adds a new
//! section.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Section header placed above the tree.
const HEADER: &str = "# Architecture";

const FENCE_OPEN: &str = "```text\n";
const FENCE_CLOSE: &str = "```\n";

/// What `write_document` did to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Appended,
}

/// Wrap rendered tree lines in a fenced code block.
fn fenced_block(tree: &str) -> String {
    let mut block = String::with_capacity(tree.len() + FENCE_OPEN.len() + FENCE_CLOSE.len());
    block.push_str(FENCE_OPEN);
    block.push_str(tree);
    if !tree.is_empty() && !tree.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(FENCE_CLOSE);
    block
}

/// Build the exact text written for `tree`.
///
/// `existing` selects the appended form, which starts with a blank-line
/// separator so the section does not run into the previous content.
pub fn render_document(tree: &str, existing: bool) -> String {
    let lead = if existing { "\n\n" } else { "" };
    format!("{}{}\n\n{}", lead, HEADER, fenced_block(tree))
}

/// Append the tree section to `path`, creating the file if needed.
pub fn write_document(path: &Path, tree: &str) -> Result<WriteOutcome> {
    let existing = path.exists();
    let io_error = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    if existing {
        options.append(true);
    } else {
        options.write(true).create(true).truncate(true);
    }
    let mut file = options.open(path).map_err(io_error)?;

    file.write_all(render_document(tree, existing).as_bytes())
        .map_err(io_error)?;

    Ok(if existing {
        WriteOutcome::Appended
    } else {
        WriteOutcome::Created
    })
}
