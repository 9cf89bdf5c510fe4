//! File generators.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use rand::RngCore;

use crate::config::{GenerationSummary, DEFAULT_CHUNK_SIZE};
use crate::error::{Error, Result};
use crate::spec::GenerationSpec;
use crate::strategy::Strategy;

/// Writes exactly `size` bytes produced by `strategy` into `writer`.
///
/// Bytes are produced into a reusable buffer of at most `chunk_size` bytes and
/// written with [`Write::write_all`]. The output does not depend on
/// `chunk_size`; a value of zero is treated as one.
///
/// # Parameters
///
/// * `writer` - Destination for the generated bytes
/// * `size` - Number of bytes to write
/// * `strategy` - Fill strategy
/// * `rng` - Random source, used only by [`Strategy::Random`]
/// * `chunk_size` - Upper bound on the bytes produced per write call
///
/// # Returns
///
/// The number of bytes written, which always equals `size` on success.
///
/// # Errors
///
/// Returns an [`io::ErrorKind::InvalidInput`] error for an empty repeating
/// sequence before anything is written, and otherwise any I/O error reported
/// by `writer`, including on the final flush.
pub fn write_pattern<W, R>(
    mut writer: W,
    size: u64,
    strategy: &Strategy,
    rng: &mut R,
    chunk_size: usize,
) -> io::Result<u64>
where
    W: Write,
    R: RngCore + ?Sized,
{
    strategy.validate()?;

    let chunk_size = chunk_size.max(1);
    let capacity = usize::try_from(size).map_or(chunk_size, |size| size.min(chunk_size));
    let mut buffer = vec![0u8; capacity];

    let mut offset = 0u64;
    while offset < size {
        let remaining = size - offset;
        let len = usize::try_from(remaining).map_or(capacity, |rem| rem.min(capacity));
        let chunk = &mut buffer[..len];

        strategy.fill(offset, chunk, rng);
        writer.write_all(chunk)?;
        offset += len as u64;
    }

    writer.flush()?;
    Ok(offset)
}

/// Generates the file described by `spec`, drawing random bytes from `rng`.
///
/// The file is created (or truncated), written completely and closed before
/// this function returns, on both the success and the error path.
///
/// # Errors
///
/// - [`Error::CreateFile`] if the file cannot be created
/// - [`Error::Write`] if writing or flushing fails
pub fn generate_with_rng<R: RngCore + ?Sized>(
    spec: &GenerationSpec,
    rng: &mut R,
) -> Result<GenerationSummary> {
    let path = spec.output_path();
    let file = File::create(path).map_err(|source| Error::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;

    let written = write_pattern(file, spec.size(), spec.strategy(), rng, DEFAULT_CHUNK_SIZE)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = written, "file written");

    Ok(GenerationSummary::new(path.to_path_buf(), written))
}

/// Generates the file described by `spec` using the thread-local RNG.
///
/// # Errors
///
/// See [`generate_with_rng`].
pub fn generate(spec: &GenerationSpec) -> Result<GenerationSummary> {
    generate_with_rng(spec, &mut rand::thread_rng())
}

/// Writes `size` uniformly random bytes to `path`.
///
/// Output differs between invocations; there is no seed.
///
/// # Errors
///
/// - [`Error::InvalidSize`] if `size` is zero
/// - [`Error::CreateFile`] / [`Error::Write`] on filesystem failures
pub fn generate_random(path: impl AsRef<Path>, size: u64) -> Result<GenerationSummary> {
    generate(&GenerationSpec::random(path.as_ref(), size)?)
}

/// Writes `size` copies of `value` to `path`.
///
/// # Errors
///
/// - [`Error::InvalidSize`] if `size` is zero
/// - [`Error::CreateFile`] / [`Error::Write`] on filesystem failures
pub fn generate_constant(
    path: impl AsRef<Path>,
    size: u64,
    value: u8,
) -> Result<GenerationSummary> {
    generate(&GenerationSpec::constant(path.as_ref(), size, value)?)
}

/// Writes `sequence` repeated and truncated to exactly `size` bytes to `path`.
///
/// # Errors
///
/// - [`Error::InvalidSize`] if `size` is zero
/// - [`Error::EmptySequence`] if `sequence` is empty
/// - [`Error::CreateFile`] / [`Error::Write`] on filesystem failures
pub fn generate_sequence(
    path: impl AsRef<Path>,
    size: u64,
    sequence: &[u8],
) -> Result<GenerationSummary> {
    generate(&GenerationSpec::sequence(path.as_ref(), size, sequence)?)
}
