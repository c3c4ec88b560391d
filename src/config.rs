//! Project configuration loading
//!
//! Settings come from the first candidate file found in the project root:
//!
//! 1. `structure.toml` with top-level keys
//! 2. `pyproject.toml` with the keys under `[tool.structure_generator]`
//!
//! Only the first file present is read. A later candidate is never consulted,
//! even when the first one leaves keys unset.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::ExclusionSet;

/// Candidate config files, in precedence order.
pub const CONFIG_FILES: &[&str] = &["structure.toml", "pyproject.toml"];

/// Output document written when no config names one.
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

const PYPROJECT: &str = "pyproject.toml";

/// Settings for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra names to skip, on top of the built-in defaults
    pub exclude: BTreeSet<String>,
    pub read_docstrings: bool,
    /// Output document name, relative to the project root
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: BTreeSet::new(),
            read_docstrings: true,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PyProject {
    tool: ToolTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ToolTable {
    structure_generator: Option<Config>,
}

impl Config {
    /// Load the config for `root` from the default candidate files.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_from(root, CONFIG_FILES)
    }

    /// Load the config for `root`, trying `candidates` in order.
    ///
    /// A candidate ending in `pyproject.toml` is read through its
    /// `[tool.structure_generator]` table; any other name is read as a flat
    /// table. Returns defaults when no candidate exists.
    pub fn load_from(root: &Path, candidates: &[&str]) -> Result<Self> {
        for candidate in candidates {
            let path = root.join(candidate);
            if !path.exists() {
                continue;
            }

            let content = fs::read_to_string(&path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;

            let config = if candidate.ends_with(PYPROJECT) {
                Self::parse_pyproject(&content, &path)?
            } else {
                Self::parse_flat(&content, &path)?
            };
            debug!(path = %path.display(), ?config, "loaded config");
            return Ok(config);
        }

        debug!(root = %root.display(), "no config file found, using defaults");
        Ok(Self::default())
    }

    fn parse_flat(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| parse_error(path, source))
    }

    fn parse_pyproject(content: &str, path: &Path) -> Result<Self> {
        let pyproject: PyProject =
            toml::from_str(content).map_err(|source| parse_error(path, source))?;
        Ok(pyproject.tool.structure_generator.unwrap_or_default())
    }

    /// Built-in exclusions merged with the configured ones.
    pub fn exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::with_defaults(self.exclude.iter().cloned())
    }

    /// Full path of the output document under `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_file)
    }
}

fn parse_error(path: &Path, source: toml::de::Error) -> Error {
    Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    }
}
