//! Small shared utilities for CLI binaries.
//!
//! Argument parsers used as clap value parsers and formatting helpers for
//! progress messages.

pub mod parse;

pub(crate) mod bytes;
