//! Command line argument parsing for gen-data

use std::path::PathBuf;

use clap::Parser;

use fixgen_cli::{parse_size, CliConfig, DEFAULT_DATA_DIR, DEFAULT_FILE_SIZE};

/// Binary test fixture generator
///
/// Writes the reference fixture set: random data, all zeros, all ones, the
/// 0x55 and 0xAA bit patterns and a repeating 16-byte counter.
#[derive(Parser, Debug)]
#[command(
    name = "gen-data",
    version,
    about = "Generate the binary test fixture set",
    long_about = "gen-data writes data_random.bin, data_zeros.bin, data_ones.bin, \
                 data_pattern_55.bin, data_pattern_aa.bin and data_pattern_seq_0123.bin \
                 into the output directory, creating it if needed."
)]
pub struct GenDataOpts {
    /// Output directory
    #[arg(
        short = 'C',
        long = "directory",
        value_name = "DIR",
        default_value = DEFAULT_DATA_DIR
    )]
    pub directory: PathBuf,

    /// Size of every file (bytes, or with K/M/G suffix)
    #[arg(short = 's', long = "size", value_name = "SIZE", value_parser = parse_size)]
    pub size: Option<u64>,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (suppress progress). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl GenDataOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            output_dir: self.directory.clone(),
            size: self.size.unwrap_or(DEFAULT_FILE_SIZE),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}
