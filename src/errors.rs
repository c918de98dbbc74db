use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The kind of filesystem object an operation required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::File => write!(f, "file"),
            PathKind::Directory => write!(f, "directory"),
        }
    }
}

/// Error type for sampling, listing, and corpus-build failures.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("path `{0}` does not exist")]
    NotFound(PathBuf),
    #[error("path `{path}` exists but is not a {expected}")]
    InvalidPathKind { path: PathBuf, expected: PathKind },
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
