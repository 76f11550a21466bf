//! The tools module provides helpers around the codec.
//!
//! The tools are:
//! - alphabet: The code <-> symbol mappings for each output format.
//! - cli: Command line interface for the lzstring binary.
//!
pub mod alphabet;
pub mod cli;
