use crate::compression::{
    compress::compress as compress_units, decompress::decompress as decompress_units,
};
use crate::error::{CodecError, MalformedStream};
use crate::tools::alphabet::RawUnits;

use super::{text, units};

/// Compress `input` into full 16 bit units. The result is not valid UTF-16 in general,
/// so it is returned as raw units.
pub fn compress(input: &str) -> Vec<u16> {
    compress_units(&units(input), &RawUnits)
}

/// Inverse of [`compress`].
pub fn decompress(input: &[u16]) -> Result<String, CodecError> {
    text(&decompress_units(input, &RawUnits)?)
}

/// Compress `input` to bytes: the units of [`compress`], big-endian.
pub fn compress_to_bytes(input: &str) -> Vec<u8> {
    compress(input)
        .iter()
        .flat_map(|unit| unit.to_be_bytes())
        .collect()
}

/// Inverse of [`compress_to_bytes`].
pub fn decompress_from_bytes(input: &[u8]) -> Result<String, CodecError> {
    if input.len() % 2 != 0 {
        return Err(MalformedStream::OddByteLength(input.len()).into());
    }
    let symbols: Vec<u16> = input
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    decompress(&symbols)
}
