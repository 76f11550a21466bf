//! Rust version of the LZ-based string compression scheme used by many web pages to embed
//! compressed payloads (chapter lists, page tables, JSON blobs) as text.
//!
//! Version 0.1.0
//!
//! The output is bit-exact with the JavaScript encoders of the same scheme, so payloads
//! produced in a browser decode here and the other way round.
//!
//! Basic usage:
//!
//! ```
//! let packed = lzstring::compress_to_base64("Hello, world!");
//! assert_eq!(packed, "BIUwNmD2A0AEDukBOYAmBCIA");
//! assert_eq!(lzstring::decompress_from_base64(&packed).unwrap(), "Hello, world!");
//! ```
//!
//! Decoding never panics on bad input; it returns a [`CodecError`] instead.
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod formats;
pub mod tools;

pub use error::{CodecError, MalformedStream};
pub use formats::base64::{compress_to_base64, decompress_from_base64};
pub use formats::raw::{compress, compress_to_bytes, decompress, decompress_from_bytes};
pub use formats::uri_component::{
    compress_to_encoded_uri_component, decompress_from_encoded_uri_component,
};
pub use formats::utf16::{compress_to_utf16, decompress_from_utf16};
