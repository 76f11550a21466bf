use crate::compression::{compress::compress, decompress::decompress};
use crate::error::CodecError;
use crate::tools::alphabet::Utf16Printable;

use super::{text, units};

/// Compress `input` into a String of printable UTF-16 characters, 15 bits per character.
/// A space is appended as terminator, as the JavaScript encoders do.
pub fn compress_to_utf16(input: &str) -> String {
    let mut symbols = compress(&units(input), &Utf16Printable);
    symbols.push(' ' as u16);
    // Symbols stay within 0x20..=0x801f, below the surrogate range
    String::from_utf16_lossy(&symbols)
}

/// Inverse of [`compress_to_utf16`].
pub fn decompress_from_utf16(input: &str) -> Result<String, CodecError> {
    text(&decompress(&units(input), &Utf16Printable)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::MalformedStream;

    fn from_units(u: &[u16]) -> String {
        String::from_utf16(u).unwrap()
    }

    #[test]
    fn known_vectors() {
        let hello = from_units(&[738, 19501, 19518, 24612, 1940, 16572, 24617, 18464, 32]);
        assert_eq!(compress_to_utf16("hello world"), hello);
        assert_eq!(decompress_from_utf16(&hello).as_deref(), Ok("hello world"));

        let euro = from_units(&[18112, 17440, 32]);
        assert_eq!(compress_to_utf16("€"), euro);
        assert_eq!(decompress_from_utf16(&euro).as_deref(), Ok("€"));

        assert_eq!(compress_to_utf16(""), from_units(&[8224, 32]));
        assert_eq!(decompress_from_utf16(&from_units(&[8224, 32])).as_deref(), Ok(""));
    }

    #[test]
    fn round_trip_long_text() {
        let s = "chapter-list|".repeat(300) + "第三百话";
        let packed = compress_to_utf16(&s);
        assert!(packed.chars().count() < s.chars().count() / 4);
        assert_eq!(decompress_from_utf16(&packed), Ok(s));
    }

    #[test]
    fn control_chars_are_foreign() {
        assert_eq!(
            decompress_from_utf16("\u{2e2}\n"),
            Err(CodecError::Malformed(MalformedStream::InvalidSymbol {
                index: 1,
                symbol: '\n' as u16
            }))
        );
    }
}
