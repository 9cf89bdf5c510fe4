//! Single binary fixture generator
//!
//! Writes one file (by default `data.bin` in the current directory) filled
//! with random bytes or a chosen byte pattern.

use std::process;

mod opts;

use opts::GenFileOpts;

use fixgen_cli::{format_error_for_stderr, init_logging, run_single};

const PROGRAM_NAME: &str = "gen-file";

fn main() -> std::io::Result<()> {
    let opts = GenFileOpts::parse();
    let config = opts.config();

    init_logging(config.verbose, config.quiet);

    if let Err(err) = run_single(&opts.file, opts.strategy(), &config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }

    Ok(())
}
