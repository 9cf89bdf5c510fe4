//! Description of a single file to generate.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::strategy::Strategy;

/// Path, size and strategy of one output file.
///
/// A spec is validated when it is constructed, so a [`GenerationSpec`] that
/// exists always describes a non-empty file with usable strategy parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    output_path: PathBuf,
    size: u64,
    strategy: Strategy,
}

impl GenerationSpec {
    /// Creates a validated spec.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSize`] if `size` is zero
    /// - [`Error::EmptySequence`] if `strategy` repeats an empty sequence
    pub fn new(output_path: impl Into<PathBuf>, size: u64, strategy: Strategy) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        strategy.validate()?;

        Ok(Self {
            output_path: output_path.into(),
            size,
            strategy,
        })
    }

    /// Spec for a file of uniformly random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `size` is zero.
    pub fn random(output_path: impl Into<PathBuf>, size: u64) -> Result<Self> {
        Self::new(output_path, size, Strategy::Random)
    }

    /// Spec for a file where every byte equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `size` is zero.
    pub fn constant(output_path: impl Into<PathBuf>, size: u64, value: u8) -> Result<Self> {
        Self::new(output_path, size, Strategy::ConstantByte(value))
    }

    /// Spec for a file repeating `sequence` until `size` bytes are written.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSize`] if `size` is zero
    /// - [`Error::EmptySequence`] if `sequence` is empty
    pub fn sequence(
        output_path: impl Into<PathBuf>,
        size: u64,
        sequence: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        Self::new(output_path, size, Strategy::RepeatingSequence(sequence.into()))
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}
