//! High-level fixture generation and CLI orchestration.

use std::io;
use std::path::Path;

use fixgen_core::{GenerationSpec, GenerationSummary, Strategy};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{InvocationError, Result};
use crate::fixtures::fixture_specs;
use crate::io::ensure_output_dir;
use crate::utils::bytes::format_size;

/// Generates one file and reports its progress.
fn generate_reported(spec: &GenerationSpec) -> Result<GenerationSummary> {
    let path = spec.output_path().display();
    info!(
        "Generating {path} ({}) with {}",
        format_size(spec.size()),
        spec.strategy()
    );

    let summary = fixgen_core::generate(spec)?;

    info!("Created {path}");
    Ok(summary)
}

/// Writes the complete fixture set described by `config`.
///
/// The workflow is strictly sequential:
///
/// 1. Ensures the output directory exists (creating it if needed)
/// 2. Builds the fixture specs for the configured size
/// 3. Generates every fixture in order, each file closed before the next
///
/// # Parameters
///
/// * `config` - Output directory, file size and verbosity
///
/// # Returns
///
/// One [`GenerationSummary`] per fixture, in generation order.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The output directory cannot be created or is not a directory
/// - The configured size is zero
/// - Any fixture file cannot be created or written
///
/// Generation stops at the first failing fixture.
pub fn generate_fixtures(config: &CliConfig) -> Result<Vec<GenerationSummary>> {
    debug!(?config, "resolved configuration");

    if ensure_output_dir(&config.output_dir)? {
        info!("Directory '{}' created", config.output_dir.display());
    }

    let specs = fixture_specs(&config.output_dir, config.size)?;
    let mut summaries = Vec::with_capacity(specs.len());
    for spec in &specs {
        summaries.push(generate_reported(spec)?);
    }

    let total: u64 = summaries.iter().map(|s| s.bytes_written).sum();
    info!(
        "All {} fixtures generated in '{}'",
        summaries.len(),
        config.output_dir.display()
    );
    debug!(bytes = total, "total bytes written");

    Ok(summaries)
}

/// Writes a single file at `path` using `strategy`.
///
/// The parent directory of `path` must already exist.
///
/// # Errors
///
/// Returns an error if the configured size is zero, the strategy parameters
/// are invalid, or the file cannot be created or written.
pub fn generate_single(
    path: &Path,
    strategy: Strategy,
    config: &CliConfig,
) -> Result<GenerationSummary> {
    debug!(
        path = %path.display(),
        size = config.size,
        %strategy,
        "resolved configuration"
    );

    let spec = GenerationSpec::new(path, config.size, strategy)?;
    generate_reported(&spec)
}

/// Runs the fixture-set generator with error context for `program`.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`]; its kind mirrors
/// the underlying failure.
pub fn run_fixtures(config: &CliConfig, program: &str) -> io::Result<()> {
    generate_fixtures(config).map_err(|source| InvocationError {
        program: program.to_string(),
        source,
    })?;
    Ok(())
}

/// Runs the single-file generator with error context for `program`.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`]; its kind mirrors
/// the underlying failure.
pub fn run_single(
    path: &Path,
    strategy: Strategy,
    config: &CliConfig,
    program: &str,
) -> io::Result<()> {
    generate_single(path, strategy, config).map_err(|source| InvocationError {
        program: program.to_string(),
        source,
    })?;
    Ok(())
}
