//! BitSource: pulls bits MSB-first out of a sequence of encoded symbols.
//!
//! Reading past the last symbol yields zero bits rather than failing; the decoder checks
//! `is_exhausted()` once per code to turn that into a truncation error.

use crate::error::{CodecError, MalformedStream};
use crate::tools::alphabet::Alphabet;

/// Reads bits from symbols that are already in memory.
#[derive(Debug)]
pub struct BitSource<'a, A: Alphabet> {
    symbols: &'a [u16],
    alphabet: &'a A,
    /// Mask of the first bit of a fresh symbol.
    reset: u32,
    /// Code of the symbol being read.
    value: u32,
    /// Mask of the next bit to read within `value`.
    position: u32,
    /// Index of the next symbol to fetch.
    index: usize,
}

impl<'a, A: Alphabet> BitSource<'a, A> {
    /// Creates a new BitSource positioned on the first bit of the first symbol.
    pub fn new(symbols: &'a [u16], alphabet: &'a A) -> Result<Self, CodecError> {
        if symbols.is_empty() {
            return Err(MalformedStream::Empty.into());
        }
        let mut source = Self {
            symbols,
            alphabet,
            reset: 1 << (A::BITS - 1),
            value: 0,
            position: 0,
            index: 0,
        };
        source.value = source.fetch()?;
        source.position = source.reset;
        Ok(source)
    }

    /// Total number of symbols in the stream.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Look up the code of the next symbol and advance. Past the end this is 0.
    fn fetch(&mut self) -> Result<u32, CodecError> {
        let index = self.index;
        self.index += 1;
        match self.symbols.get(index) {
            None => Ok(0),
            Some(&symbol) => self
                .alphabet
                .code(symbol)
                .ok_or_else(|| MalformedStream::InvalidSymbol { index, symbol }.into()),
        }
    }

    /// Return the next bit (1 or 0).
    pub fn bit(&mut self) -> Result<u32, CodecError> {
        let bit = (self.value & self.position != 0) as u32;
        self.position >>= 1;
        if self.position == 0 {
            self.position = self.reset;
            self.value = self.fetch()?;
        }
        Ok(bit)
    }

    /// Return the next `width` bits, assembled least significant bit first.
    pub fn read_bits(&mut self, width: u32) -> Result<u32, CodecError> {
        let mut result = 0;
        for power in 0..width {
            result |= self.bit()? << power;
        }
        Ok(result)
    }

    /// True once the reader has moved beyond the last real symbol.
    pub fn is_exhausted(&self) -> bool {
        self.index > self.symbols.len()
    }

    /// True if every bit not yet read is zero (padding only).
    pub fn rest_is_zero(&mut self) -> Result<bool, CodecError> {
        // Unread bits of the current symbol are `position` and everything below it
        if self.value & ((self.position << 1) - 1) != 0 {
            return Ok(false);
        }
        while self.index < self.symbols.len() {
            if self.fetch()? != 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Debugging function. Report current position as symbol.bit
    pub fn loc(&self) -> String {
        format!(
            "[{}.{}]",
            self.index - 1,
            A::BITS - 1 - self.position.trailing_zeros()
        )
    }
}

#[cfg(test)]
mod test {
    use super::BitSource;
    use crate::error::{CodecError, MalformedStream};
    use crate::tools::alphabet::{Base64, RawUnits};

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn empty_is_rejected() {
        let err = BitSource::new(&[], &Base64).unwrap_err();
        assert_eq!(err, CodecError::Malformed(MalformedStream::Empty));
    }

    #[test]
    fn basic_test() {
        // 'h' is 33 = 0b100001
        let x = units("h");
        let mut br = BitSource::new(&x, &Base64).unwrap();
        assert_eq!(br.bit(), Ok(1));
        for _ in 0..4 {
            assert_eq!(br.bit(), Ok(0));
        }
        assert!(!br.is_exhausted());
        assert_eq!(br.bit(), Ok(1));
        assert!(br.is_exhausted());
        // Past the end everything reads as zero
        assert_eq!(br.bit(), Ok(0));
    }

    #[test]
    fn read_bits_lsb_first() {
        // 'Q' is 0b010000, the first two bits assemble to 2
        let x = units("QA");
        let mut br = BitSource::new(&x, &Base64).unwrap();
        assert_eq!(br.read_bits(2), Ok(2));
        assert_eq!(br.loc(), "[0.2]");
        assert_eq!(br.read_bits(4), Ok(0));
        assert_eq!(br.loc(), "[1.0]");
    }

    #[test]
    fn wide_symbols() {
        let x = [0x8001, 0x0000];
        let mut br = BitSource::new(&x, &RawUnits).unwrap();
        assert_eq!(br.read_bits(16), Ok(0x8001));
        assert_eq!(br.len(), 2);
    }

    #[test]
    fn foreign_symbol_is_reported_with_index() {
        let x = units("A*");
        let mut br = BitSource::new(&x, &Base64).unwrap();
        let err = br.read_bits(6).unwrap_err();
        assert_eq!(
            err,
            CodecError::Malformed(MalformedStream::InvalidSymbol {
                index: 1,
                symbol: '*' as u16
            })
        );
    }

    #[test]
    fn rest_is_zero_test() {
        let x = units("QA==");
        let mut br = BitSource::new(&x, &Base64).unwrap();
        br.read_bits(2).unwrap();
        assert_eq!(br.rest_is_zero(), Ok(true));

        let x = units("QAB");
        let mut br = BitSource::new(&x, &Base64).unwrap();
        br.read_bits(2).unwrap();
        assert_eq!(br.rest_is_zero(), Ok(false));

        let x = units("R");
        let mut br = BitSource::new(&x, &Base64).unwrap();
        br.read_bits(2).unwrap();
        assert_eq!(br.rest_is_zero(), Ok(false));
    }
}
