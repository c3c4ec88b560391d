//! Configuration types for the tree walker

use crate::config::Config;

use super::filter::ExclusionSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub exclusions: ExclusionSet,
    /// Attach leading docstrings to `.py` files
    pub read_docstrings: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for WalkerConfig {
    fn from(config: &Config) -> Self {
        Self {
            exclusions: config.exclusion_set(),
            read_docstrings: config.read_docstrings,
        }
    }
}
