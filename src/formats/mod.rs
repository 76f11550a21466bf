//! Public entry points, one module per output format. All of them share the same compressor
//! and decompressor and differ only in the alphabet used to turn bits into text.
//!
//! Text is handled as UTF-16 units, as the JavaScript encoders that produce these payloads do,
//! so characters outside the Basic Multilingual Plane travel as surrogate pairs.

pub mod base64;
pub mod raw;
pub mod uri_component;
pub mod utf16;

use crate::error::{CodecError, MalformedStream};

pub(crate) fn units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Turn decoded units back into a String.
pub(crate) fn text(units: &[u16]) -> Result<String, CodecError> {
    String::from_utf16(units).map_err(|_| MalformedStream::InvalidUtf16.into())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lone_surrogate_is_rejected() {
        assert_eq!(
            text(&[0x61, 0xd800]),
            Err(CodecError::Malformed(MalformedStream::InvalidUtf16))
        );
    }

    #[test]
    fn astral_chars_become_pairs() {
        assert_eq!(units("👍"), vec![0xd83d, 0xdc4d]);
        assert_eq!(text(&units("👍a")), Ok("👍a".to_string()));
    }
}
