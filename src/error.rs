//! Error types returned by the decoding side of the codec.
//!
//! Compression cannot fail. Decompression fails either because the payload is not a stream
//! produced by a compatible encoder ([`MalformedStream`]), or because the decoder caught
//! itself breaking one of its own invariants ([`CodecError::Internal`]).

use thiserror::Error;

/// Every failure the codec can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input is not a valid encoding.
    #[error("malformed stream: {0}")]
    Malformed(#[from] MalformedStream),
    /// A logic defect inside the codec, never caused by input alone.
    #[error("internal consistency error: {0}")]
    Internal(&'static str),
}

/// The ways an encoded payload can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedStream {
    #[error("empty payload carries no bootstrap literal")]
    Empty,
    #[error("symbol {symbol:#06x} at index {index} is not part of the alphabet")]
    InvalidSymbol { index: usize, symbol: u16 },
    #[error("bootstrap value {0} does not announce a literal")]
    InvalidBootstrap(u32),
    #[error("code {code} is beyond the dictionary (size {size})")]
    CodeOutOfRange { code: u32, size: usize },
    #[error("stream ran past its {0} symbols without an end marker")]
    Truncated(usize),
    #[error("non-zero data follows the end marker")]
    TrailingData,
    #[error("decoded text is not valid UTF-16")]
    InvalidUtf16,
    #[error("byte payload has odd length {0}")]
    OddByteLength(usize),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn malformed_converts_into_codec_error() {
        let err: CodecError = MalformedStream::TrailingData.into();
        assert_eq!(err, CodecError::Malformed(MalformedStream::TrailingData));
        assert_eq!(
            err.to_string(),
            "malformed stream: non-zero data follows the end marker"
        );
    }

    #[test]
    fn internal_is_reported_separately() {
        let err = CodecError::Internal("dictionary entry vanished");
        assert!(!matches!(err, CodecError::Malformed(_)));
        assert!(err.to_string().starts_with("internal consistency error"));
    }

    #[test]
    fn invalid_symbol_message() {
        let err = MalformedStream::InvalidSymbol { index: 3, symbol: 0x2a };
        assert_eq!(
            err.to_string(),
            "symbol 0x002a at index 3 is not part of the alphabet"
        );
    }
}
