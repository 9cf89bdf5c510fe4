//! Error types for the generator CLIs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A structured CLI error that preserves the underlying failure.
///
/// Carries the program name so `main` can print a single prefixed line while
/// `-qq` is still able to suppress it.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output (e.g. "gen-data").
    pub program: String,
    /// Underlying error produced by processing.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<InvocationError> for io::Error {
    fn from(err: InvocationError) -> Self {
        let kind = err.source.kind();
        io::Error::new(kind, err)
    }
}

/// Formats an error message for stderr, respecting `-qq`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"gen-data"`).
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The I/O error returned by the CLI runner.
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise returns a formatted single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }

    let run_err = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>());

    if let Some(run_err) = run_err {
        return Some(run_err.to_string());
    }

    Some(format!("{program}: {err}"))
}

/// Main error type for the generator CLIs.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create the output directory
    #[error("{}: Cannot create directory: {source}", path.display())]
    CreateDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output directory path is occupied by something else
    #[error("{}: Not a directory", path.display())]
    NotADirectory {
        /// Path that exists but is not a directory
        path: PathBuf,
    },

    /// Generating one of the files failed
    #[error(transparent)]
    Generate(#[from] fixgen_core::Error),
}

/// Specialized `Result` type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the [`io::ErrorKind`] that best describes this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::CreateDirectory { source, .. } => source.kind(),
            Error::NotADirectory { .. } => io::ErrorKind::AlreadyExists,
            Error::Generate(err) => match err {
                fixgen_core::Error::CreateFile { source, .. }
                | fixgen_core::Error::Write { source, .. } => source.kind(),
                fixgen_core::Error::InvalidSize | fixgen_core::Error::EmptySequence => {
                    io::ErrorKind::InvalidInput
                }
            },
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(err.kind(), err)
    }
}
