//! Progress reporting through `tracing`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags.
pub fn log_filter(verbose: bool, quiet: u8) -> &'static str {
    match quiet {
        0 if verbose => "debug",
        0 => "info",
        1 => "warn",
        _ => "error",
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this more
/// than once keeps the first subscriber.
pub fn init_logging(verbose: bool, quiet: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
