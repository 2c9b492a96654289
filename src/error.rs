//! Error types for walking and rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a scan.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan root does not exist or cannot be read.
    #[error("cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scan root exists but is not a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// An ignore pattern failed to compile.
    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Writing to the output sink failed.
    #[error("error writing output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an output-sink error.
    pub fn output(source: io::Error) -> Self {
        Self::Output { source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
