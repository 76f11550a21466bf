//! The compression module holds the LZ78/LZW-style core shared by every output format.
//!
//! Compression scans the input once, growing a phrase dictionary and writing:
//! - a literal (marker code 0 or 1, then 8 or 16 raw bits) the first time a unit is used,
//! - the dictionary code of the longest known phrase otherwise,
//! - the end marker (code 2) once the input is consumed.
//!
//! Codes start 2 bits wide and gain a bit each time the dictionary doubles.
//!
//! Decompression rebuilds the same dictionary in lockstep from the codes it reads. Any code
//! the encoder could not have produced is a fatal error for that call.
//!

pub mod code;
pub mod compress;
pub mod decompress;
