//! Shared functionality for the fixture generator command-line tools.
//!
//! `gen-data` writes the reference fixture set into a directory, `gen-file`
//! writes a single file with one chosen strategy. Both binaries are thin
//! wrappers around [`run_fixtures`] and [`run_single`].

pub mod config;
pub mod error;
pub mod fixtures;
pub mod io;
pub mod logging;
pub mod process;
pub mod utils;


pub use config::{CliConfig, DEFAULT_DATA_DIR, DEFAULT_FILE_SIZE, DEFAULT_SINGLE_FILE};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use fixtures::{default_fixtures, fixture_specs, FixtureEntry, COUNTER_SEQUENCE};
pub use io::ensure_output_dir;
pub use logging::{init_logging, log_filter};
pub use process::{generate_fixtures, generate_single, run_fixtures, run_single};
pub use utils::parse::{parse_byte, parse_sequence, parse_size, ByteSequence};

pub use fixgen_core::{GenerationSpec, GenerationSummary, Strategy};
