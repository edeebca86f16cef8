//! The tools module provides the helper functions for the huffzip compressor.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - escape: Placeholder-token escaping applied before analysis and reversed after decoding.
//! - freq_count: Character frequency count of the escaped text.
//!
pub mod cli;
pub mod escape;
pub mod freq_count;
