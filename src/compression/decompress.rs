use std::ops::Range;

use log::{debug, error, trace};

use super::code::{Code, CodeWidth};
use crate::bitstream::bitsource::BitSource;
use crate::error::{CodecError, MalformedStream};
use crate::tools::alphabet::Alphabet;

/*
    Every dictionary entry the decoder creates is a contiguous slice of the output built so
    far: a literal is pushed to the output as it is read, a reference is copied to the end of
    the output, and the new entry `w + entry[0]` is exactly the span covering `w` and the
    first unit of the entry that was appended right after it. So the dictionary only has to
    hold ranges into the output.
*/

/// Decoder state for one call.
struct Decompressor<'a, A: Alphabet> {
    source: BitSource<'a, A>,
    /// Ranges into `output`. Indices 0-2 are placeholders for the reserved codes.
    dict: Vec<Range<usize>>,
    width: CodeWidth,
    output: Vec<u16>,
}

impl<'a, A: Alphabet> Decompressor<'a, A> {
    /// Read a literal of `bits` width, append it to the output and return its range.
    fn literal(&mut self, bits: u32) -> Result<Range<usize>, CodecError> {
        let unit = self.source.read_bits(bits)? as u16;
        let at = self.output.len();
        self.output.push(unit);
        Ok(at..at + 1)
    }

    /// Check the tail after the end marker and hand back the output.
    fn finish(mut self) -> Result<Vec<u16>, CodecError> {
        if !self.source.rest_is_zero()? {
            error!("Data found after the end marker at {}.", self.source.loc());
            return Err(MalformedStream::TrailingData.into());
        }
        debug!(
            "Decompressed {} symbols into {} units: {} dictionary codes, final code width {} bits.",
            self.source.len(),
            self.output.len(),
            self.dict.len(),
            self.width.bits
        );
        Ok(self.output)
    }

    /// Resolve a dictionary reference, appending the entry to the output.
    fn entry(&mut self, code: u32, w: &Range<usize>) -> Result<Range<usize>, CodecError> {
        let at = self.output.len();
        match self.dict.get(code as usize) {
            Some(range) => {
                let range = range.clone();
                self.output.extend_from_within(range.clone());
                Ok(at..at + range.len())
            }
            // The entry the encoder created on the step that produced this code: w + w[0]
            None if code as usize == self.dict.len() => {
                let first = *self
                    .output
                    .get(w.start)
                    .ok_or(CodecError::Internal("previous entry is outside the output"))?;
                self.output.extend_from_within(w.clone());
                self.output.push(first);
                Ok(at..at + w.len() + 1)
            }
            None => {
                error!(
                    "Code {} at {} is beyond the dictionary ({} entries).",
                    code,
                    self.source.loc(),
                    self.dict.len()
                );
                Err(MalformedStream::CodeOutOfRange {
                    code,
                    size: self.dict.len(),
                }
                .into())
            }
        }
    }
}

/// Decompress symbols of the given alphabet back into UTF-16 units.
pub fn decompress<A: Alphabet>(symbols: &[u16], alphabet: &A) -> Result<Vec<u16>, CodecError> {
    let source = BitSource::new(symbols, alphabet)?;
    let mut dx = Decompressor {
        source,
        dict: vec![0..0; Code::FIRST_ENTRY as usize],
        width: CodeWidth::after_bootstrap(),
        output: Vec::with_capacity(symbols.len() * 2),
    };

    // Bootstrap: the first code is 2 bits wide and must announce a literal (or end at once)
    let bootstrap = dx.source.read_bits(2)?;
    let mut w = match Code::from_raw(bootstrap) {
        Code::Literal8 => dx.literal(8)?,
        Code::Literal16 => dx.literal(16)?,
        Code::EndOfStream => {
            trace!("Stream holds no data.");
            return dx.finish();
        }
        Code::Entry(value) => {
            error!("Bootstrap value {} does not announce a literal.", value);
            return Err(MalformedStream::InvalidBootstrap(value).into());
        }
    };
    dx.dict.push(w.clone());

    loop {
        if dx.source.is_exhausted() {
            error!("No end marker within {} symbols.", dx.source.len());
            return Err(MalformedStream::Truncated(dx.source.len()).into());
        }

        let raw = dx.source.read_bits(dx.width.bits)?;
        let entry = match Code::from_raw(raw) {
            Code::EndOfStream => return dx.finish(),
            code @ (Code::Literal8 | Code::Literal16) => {
                let bits = if code == Code::Literal8 { 8 } else { 16 };
                let range = dx.literal(bits)?;
                dx.dict.push(range.clone());
                dx.width.tick();
                range
            }
            Code::Entry(code) => dx.entry(code, &w)?,
        };

        // w + entry[0] sits contiguously in the output
        dx.dict.push(w.start..w.end + 1);
        dx.width.tick();
        w = entry;
    }
}
