//! Command line argument parsing for gen-file

use std::path::{Path, PathBuf};

use clap::Parser;

use fixgen_cli::{
    parse_byte, parse_sequence, parse_size, ByteSequence, CliConfig, Strategy, DEFAULT_FILE_SIZE,
    DEFAULT_SINGLE_FILE,
};

/// Single binary fixture generator
///
/// Writes one file filled with random bytes, a constant byte, or a repeating
/// byte sequence.
#[derive(Parser, Debug)]
#[command(
    name = "gen-file",
    version,
    about = "Generate a single binary fixture file",
    long_about = "gen-file writes one file of the requested size. Without a pattern option \
                 the file is filled with uniformly random bytes."
)]
pub struct GenFileOpts {
    /// Output file
    #[arg(value_name = "FILE", default_value = DEFAULT_SINGLE_FILE)]
    pub file: PathBuf,

    /// Size of the file (bytes, or with K/M/G suffix)
    #[arg(short = 's', long = "size", value_name = "SIZE", value_parser = parse_size)]
    pub size: Option<u64>,

    /// Fill with a single byte value (decimal or 0x-prefixed hex)
    #[arg(
        short = 'b',
        long = "byte",
        value_name = "BYTE",
        value_parser = parse_byte,
        conflicts_with = "sequence"
    )]
    pub byte: Option<u8>,

    /// Fill with a repeating byte sequence given as hex digits (e.g. 00010203)
    #[arg(
        short = 'p',
        long = "sequence",
        value_name = "HEX",
        value_parser = parse_sequence,
        conflicts_with = "byte"
    )]
    pub sequence: Option<ByteSequence>,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (suppress progress). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl GenFileOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Determine the fill strategy from the pattern options
    pub fn strategy(&self) -> Strategy {
        match (self.byte, &self.sequence) {
            (Some(value), _) => Strategy::ConstantByte(value),
            (None, Some(sequence)) => Strategy::RepeatingSequence(sequence.clone().into_inner()),
            (None, None) => Strategy::Random,
        }
    }

    /// Build CLI configuration from the parsed options
    ///
    /// The output directory is the one holding the target file.
    pub fn config(&self) -> CliConfig {
        let output_dir = match self.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };

        CliConfig {
            output_dir,
            size: self.size.unwrap_or(DEFAULT_FILE_SIZE),
            verbose: self.verbose,
            quiet: self.quiet,
            ..CliConfig::default()
        }
    }
}
