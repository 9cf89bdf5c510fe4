//! Constants and result types shared by the generators.

use std::path::PathBuf;

/// Size of the reference fixture files (2 MiB).
pub const DEFAULT_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Number of bytes produced per write call.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Outcome of a single file generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// File that was written.
    pub path: PathBuf,
    /// Number of bytes written to it.
    pub bytes_written: u64,
}

impl GenerationSummary {
    pub(crate) fn new(path: PathBuf, bytes_written: u64) -> Self {
        Self {
            path,
            bytes_written,
        }
    }
}
