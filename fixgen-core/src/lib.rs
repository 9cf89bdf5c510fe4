//! # fixgen-core
//!
//! Deterministic and random byte-pattern generation for binary test fixtures.
//!
//! This crate writes files of an exact size filled by one of three strategies:
//! uniformly random bytes, a single repeated byte, or a repeating multi-byte
//! sequence. Output is produced in fixed-size chunks, so the byte-exact result
//! is independent of the chunk size used.

pub mod config;
pub mod error;
pub mod generate;
pub mod spec;
pub mod strategy;


pub use config::{GenerationSummary, DEFAULT_CHUNK_SIZE, DEFAULT_FILE_SIZE};
pub use error::{Error, Result};
pub use generate::{
    generate, generate_constant, generate_random, generate_sequence, generate_with_rng,
    write_pattern,
};
pub use spec::GenerationSpec;
pub use strategy::Strategy;
