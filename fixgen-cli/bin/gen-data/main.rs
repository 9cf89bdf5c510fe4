//! Binary test fixture generator
//!
//! Writes the reference set of random and patterned binary files into a data
//! directory for use by other test suites and benchmarks.

use std::process;

mod opts;

use opts::GenDataOpts;

use fixgen_cli::{format_error_for_stderr, init_logging, run_fixtures};

const PROGRAM_NAME: &str = "gen-data";

fn main() -> std::io::Result<()> {
    let opts = GenDataOpts::parse();
    let config = opts.config();

    init_logging(config.verbose, config.quiet);

    if let Err(err) = run_fixtures(&config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }

    Ok(())
}
