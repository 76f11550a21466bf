//! The bitstream module is the bit-level I/O layer of the codec.
//!
//! Codes are written least significant bit first, and those bits are packed most significant
//! bit first into fixed-width symbols (6 bits for base64, 15 or 16 for the UTF-16 forms).
//! Neither side does any I/O: the sink fills a Vec of symbols and the source reads from a
//! slice of them, each through an [`Alphabet`](crate::tools::alphabet::Alphabet).
//!
pub mod bitsink;
pub mod bitsource;
