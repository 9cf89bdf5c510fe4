//! Byte-fill strategies.

use std::fmt;

use rand::RngCore;

use crate::error::{Error, Result};

/// Algorithm used to produce the bytes of one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Every byte drawn independently and uniformly from `0..=255`.
    Random,
    /// Every byte equal to the given value.
    ConstantByte(u8),
    /// `output[i] = sequence[i % sequence.len()]`.
    RepeatingSequence(Vec<u8>),
}

impl Strategy {
    /// Checks the strategy parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] for a repeating sequence with no bytes.
    pub fn validate(&self) -> Result<()> {
        match self {
            Strategy::RepeatingSequence(sequence) if sequence.is_empty() => {
                Err(Error::EmptySequence)
            }
            _ => Ok(()),
        }
    }

    /// Fills `buf` with the bytes found at `offset..offset + buf.len()` of the
    /// generated stream.
    ///
    /// For deterministic strategies the result depends only on `offset`, so a
    /// stream can be produced chunk by chunk without changing its contents.
    /// `rng` is only consulted by [`Strategy::Random`].
    ///
    /// The strategy must already have passed [`validate`](Self::validate).
    pub(crate) fn fill<R: RngCore + ?Sized>(&self, offset: u64, buf: &mut [u8], rng: &mut R) {
        match self {
            Strategy::Random => rng.fill_bytes(buf),
            Strategy::ConstantByte(value) => buf.fill(*value),
            Strategy::RepeatingSequence(sequence) => {
                debug_assert!(!sequence.is_empty(), "fill called with an empty sequence");
                let start = (offset % sequence.len() as u64) as usize;
                let source = sequence.iter().cycle().skip(start);
                for (dst, src) in buf.iter_mut().zip(source) {
                    *dst = *src;
                }
            }
        }
    }

    /// Returns `true` if the same parameters always produce the same bytes.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Strategy::Random)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random data"),
            Strategy::ConstantByte(value) => write!(f, "byte pattern {value:#04x}"),
            Strategy::RepeatingSequence(sequence) => {
                write!(f, "sequence pattern 0x")?;
                for byte in sequence {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}
