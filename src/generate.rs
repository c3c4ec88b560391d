//! End-to-end generation: config, walk, render, write

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::output::{TreeFormatter, WriteOutcome, render_document, write_document};
use crate::tree::{TreeWalker, WalkerConfig};

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub outcome: WriteOutcome,
    pub dir_count: usize,
    pub file_count: usize,
}

/// Render the tree for `root` using an already loaded config.
pub fn render_tree(root: &Path, config: &Config) -> Result<(String, (usize, usize))> {
    let walker = TreeWalker::new(WalkerConfig::from(config));
    let tree = walker.walk(root)?;
    let counts = tree.counts();
    debug!(dirs = counts.0, files = counts.1, "walked project tree");
    Ok((TreeFormatter::new().format(&tree), counts))
}

/// Generate the architecture section for the project at `root`.
pub fn generate(root: &Path) -> Result<GenerateReport> {
    let config = Config::load(root)?;
    let (tree, (dir_count, file_count)) = render_tree(root, &config)?;

    let output_path = config.output_path(root);
    let outcome = write_document(&output_path, &tree)?;
    info!(path = %output_path.display(), ?outcome, "wrote architecture section");

    Ok(GenerateReport {
        output_path,
        outcome,
        dir_count,
        file_count,
    })
}

/// Build the text `generate` would write for `root`, without writing it.
pub fn preview(root: &Path) -> Result<String> {
    let config = Config::load(root)?;
    let (tree, _) = render_tree(root, &config)?;
    let existing = config.output_path(root).exists();
    Ok(render_document(&tree, existing))
}
