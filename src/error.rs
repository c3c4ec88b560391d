//! Error types for structure generation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal errors that abort a generation run.
///
/// Docstring read failures are not represented here: they are logged and
/// the file is rendered without a docstring.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Error::ConfigParse { path, .. } => path,
            Error::ReadDir { path, .. } => path,
            Error::Io { path, .. } => path,
        }
    }
}
