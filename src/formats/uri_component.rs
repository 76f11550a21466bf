use crate::compression::{compress::compress, decompress::decompress};
use crate::error::CodecError;
use crate::tools::alphabet::UriSafe;

use super::{text, units};

/// Compress `input` to text that can be placed in a URI component without escaping.
pub fn compress_to_encoded_uri_component(input: &str) -> String {
    compress(&units(input), &UriSafe)
        .iter()
        .map(|&s| char::from(s as u8))
        .collect()
}

/// Inverse of [`compress_to_encoded_uri_component`]. A space is read as `+`, since form
/// decoding turns one into the other.
pub fn decompress_from_encoded_uri_component(input: &str) -> Result<String, CodecError> {
    let symbols: Vec<u16> = units(input)
        .into_iter()
        .map(|u| if u == ' ' as u16 { '+' as u16 } else { u })
        .collect();
    text(&decompress(&symbols, &UriSafe)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::MalformedStream;

    #[test]
    fn known_vectors() {
        for (plain, packed) in [
            ("", "Q"),
            ("a", "IZA"),
            ("hello world", "BYUwNmD2AEDukCcwBMg"),
            ("漫画", "tT2m5XI"),
            ("~~~???///", "H4j84eio"),
        ] {
            assert_eq!(compress_to_encoded_uri_component(plain), packed);
            assert_eq!(
                decompress_from_encoded_uri_component(packed).as_deref(),
                Ok(plain)
            );
        }
    }

    #[test]
    fn plus_survives_form_decoding() {
        let s = "ab".repeat(1000);
        let packed = compress_to_encoded_uri_component(&s);
        assert!(packed.contains('+') && packed.contains('-'));
        assert!(!packed.contains('/') && !packed.contains('='));
        let mangled = packed.replace('+', " ");
        assert_eq!(decompress_from_encoded_uri_component(&mangled), Ok(s));
    }

    #[test]
    fn dollar_reads_as_padding() {
        assert_eq!(decompress_from_encoded_uri_component("IZA$").as_deref(), Ok("a"));
        assert_eq!(decompress_from_encoded_uri_component("Q$$").as_deref(), Ok(""));
        assert!(!compress_to_encoded_uri_component(&"$~".repeat(500)).contains('$'));
    }

    #[test]
    fn base64_only_symbols_are_foreign() {
        assert_eq!(
            decompress_from_encoded_uri_component("IZA="),
            Err(CodecError::Malformed(MalformedStream::InvalidSymbol {
                index: 3,
                symbol: '=' as u16
            }))
        );
    }
}
