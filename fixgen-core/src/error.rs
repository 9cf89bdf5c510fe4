//! Error types and result handling for fixture generation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a generation call.
#[derive(Debug)]
pub enum Error {
    /// Requested file size is zero.
    InvalidSize,

    /// Repeating sequence has no bytes to repeat.
    EmptySequence,

    /// Output file could not be created or truncated.
    CreateFile {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing or flushing the output file failed.
    Write {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` if the error was caused by invalid caller arguments
    /// rather than the filesystem.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidSize | Error::EmptySequence)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize => write!(f, "invalid file size: must be greater than zero"),
            Error::EmptySequence => write!(f, "repeating sequence must not be empty"),
            Error::CreateFile { path, source } => {
                write!(f, "{}: cannot create file: {source}", path.display())
            }
            Error::Write { path, source } => {
                write!(f, "{}: write failed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CreateFile { source, .. } | Error::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::InvalidSize | Error::EmptySequence => io::ErrorKind::InvalidInput,
            // Preserve the original error kind
            Error::CreateFile { source, .. } | Error::Write { source, .. } => source.kind(),
        };
        io::Error::new(kind, err)
    }
}
