//! Configuration types and constants for the generator CLIs.

use std::path::PathBuf;

pub use fixgen_core::DEFAULT_FILE_SIZE;

/// Directory the fixture set is written to
pub const DEFAULT_DATA_DIR: &str = "data";

/// File written by `gen-file` when no path is given
pub const DEFAULT_SINGLE_FILE: &str = "data.bin";

/// Configuration for CLI operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory receiving the fixture set, or holding the single output file
    pub output_dir: PathBuf,
    /// Size of every generated file in bytes
    pub size: u64,
    /// Verbose output
    pub verbose: bool,
    /// Quiet level (number of `-q` flags)
    pub quiet: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_DATA_DIR),
            size: DEFAULT_FILE_SIZE,
            verbose: false,
            quiet: 0,
        }
    }
}
