//! The reference fixture set.

use std::path::Path;

use fixgen_core::{GenerationSpec, Strategy};

use crate::error::Result;

/// 16-byte counter used by `data_pattern_seq_0123.bin`.
pub const COUNTER_SEQUENCE: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
];

/// File name and fill strategy of one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureEntry {
    /// File name inside the output directory
    pub file_name: &'static str,
    /// Strategy used to fill the file
    pub strategy: Strategy,
}

impl FixtureEntry {
    fn new(file_name: &'static str, strategy: Strategy) -> Self {
        Self {
            file_name,
            strategy,
        }
    }
}

/// Returns the fixture set in generation order.
pub fn default_fixtures() -> Vec<FixtureEntry> {
    vec![
        FixtureEntry::new("data_random.bin", Strategy::Random),
        FixtureEntry::new("data_zeros.bin", Strategy::ConstantByte(0x00)),
        FixtureEntry::new("data_ones.bin", Strategy::ConstantByte(0xFF)),
        // 01010101...
        FixtureEntry::new("data_pattern_55.bin", Strategy::ConstantByte(0x55)),
        // 10101010...
        FixtureEntry::new("data_pattern_aa.bin", Strategy::ConstantByte(0xAA)),
        FixtureEntry::new(
            "data_pattern_seq_0123.bin",
            Strategy::RepeatingSequence(COUNTER_SEQUENCE.to_vec()),
        ),
    ]
}

/// Builds validated generation specs for every fixture under `dir`.
///
/// # Errors
///
/// Returns an error if `size` is zero.
pub fn fixture_specs(dir: &Path, size: u64) -> Result<Vec<GenerationSpec>> {
    default_fixtures()
        .into_iter()
        .map(|entry| {
            GenerationSpec::new(dir.join(entry.file_name), size, entry.strategy)
                .map_err(Into::into)
        })
        .collect()
}
