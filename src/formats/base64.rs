use crate::compression::{compress::compress, decompress::decompress};
use crate::error::CodecError;
use crate::tools::alphabet::{Base64, PAD};

use super::{text, units};

/// Compress `input` to base64 text, padded with `=` to a multiple of 4 characters.
pub fn compress_to_base64(input: &str) -> String {
    let symbols = compress(&units(input), &Base64);
    // Every symbol is ASCII
    let mut out: String = symbols.iter().map(|&s| char::from(s as u8)).collect();
    let pad = match out.len() % 4 {
        0 => 0,
        1 => 3,
        2 => 2,
        _ => 1,
    };
    out.extend(std::iter::repeat(char::from(PAD)).take(pad));
    out
}

/// Inverse of [`compress_to_base64`]. Padding is optional.
pub fn decompress_from_base64(input: &str) -> Result<String, CodecError> {
    text(&decompress(&units(input), &Base64)?)
}
