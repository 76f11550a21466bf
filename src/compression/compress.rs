use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use super::code::{Code, CodeWidth};
use crate::bitstream::bitsink::BitSink;
use crate::tools::alphabet::Alphabet;

/*
    The dictionary is never stored as strings. A multi-unit entry is always an existing
    entry plus one unit, so keying it by (code of the prefix, last unit) is the same as
    keying it by the whole substring, and costs no allocation per lookup.
*/

/// Phrase dictionary built while compressing.
struct Dictionary {
    /// Code of every single unit seen so far.
    units: FxHashMap<u16, u32>,
    /// Code of every longer phrase, keyed by (prefix code, last unit).
    phrases: FxHashMap<(u32, u16), u32>,
    /// Units that have a code but have not been written yet. Their first use is a literal.
    pending: FxHashSet<u16>,
    /// Next code to hand out.
    size: u32,
}

impl Dictionary {
    fn new() -> Self {
        Self {
            units: FxHashMap::default(),
            phrases: FxHashMap::default(),
            pending: FxHashSet::default(),
            size: Code::FIRST_ENTRY,
        }
    }

    /// Returns the code for `unit`, adding it (as pending) if it is new.
    fn unit(&mut self, unit: u16) -> u32 {
        if let Some(&code) = self.units.get(&unit) {
            return code;
        }
        let code = self.size;
        self.units.insert(unit, code);
        self.pending.insert(unit);
        self.size += 1;
        code
    }

    fn phrase(&self, prefix: u32, unit: u16) -> Option<u32> {
        self.phrases.get(&(prefix, unit)).copied()
    }

    fn add_phrase(&mut self, prefix: u32, unit: u16) {
        self.phrases.insert((prefix, unit), self.size);
        self.size += 1;
    }
}

/// The longest dictionary match found so far (`w`).
#[derive(Debug, Clone, Copy)]
struct Phrase {
    code: u32,
    first: u16,
    single: bool,
}

/// Compressor state for one call.
struct Compressor<'a, A: Alphabet> {
    sink: BitSink<'a, A>,
    dict: Dictionary,
    width: CodeWidth,
}

impl<'a, A: Alphabet> Compressor<'a, A> {
    /// Write the code for `w`. A unit that has never been written goes out as a literal.
    fn emit(&mut self, w: Phrase) {
        if w.single && self.dict.pending.remove(&w.first) {
            let (marker, literal_bits) = Code::literal_for(w.first);
            self.sink.write_bits(marker.raw(), self.width.bits);
            self.sink.write_bits(w.first as u32, literal_bits);
            self.width.tick();
        } else {
            self.sink.write_bits(w.code, self.width.bits);
        }
        self.width.tick();
    }
}

/// Compress a sequence of UTF-16 units into symbols of the given alphabet.
pub fn compress<A: Alphabet>(input: &[u16], alphabet: &A) -> Vec<u16> {
    let mut cx = Compressor {
        sink: BitSink::new(alphabet, input.len() / 2 + 2),
        dict: Dictionary::new(),
        width: CodeWidth::for_compress(),
    };
    let mut w: Option<Phrase> = None;

    for &c in input {
        let c_code = cx.dict.unit(c);
        let single = Phrase {
            code: c_code,
            first: c,
            single: true,
        };
        w = match w {
            None => Some(single),
            Some(prefix) => match cx.dict.phrase(prefix.code, c) {
                // Extend the match
                Some(code) => Some(Phrase {
                    code,
                    first: prefix.first,
                    single: false,
                }),
                None => {
                    cx.emit(prefix);
                    cx.dict.add_phrase(prefix.code, c);
                    Some(single)
                }
            },
        };
    }

    // Flush what is left of the match, then the end marker at the current width
    if let Some(prefix) = w {
        cx.emit(prefix);
    }
    cx.sink.write_bits(Code::EndOfStream.raw(), cx.width.bits);
    trace!("End marker written at {}.", cx.sink.loc());

    debug!(
        "Compressed {} units: {} dictionary codes, final code width {} bits.",
        input.len(),
        cx.dict.size,
        cx.width.bits
    );
    cx.sink.finish()
}

#[cfg(test)]
mod test {
    use super::compress;
    use crate::tools::alphabet::{Base64, RawUnits};

    fn b64(s: &str) -> String {
        let units: Vec<u16> = s.encode_utf16().collect();
        String::from_utf16(&compress(&units, &Base64)).unwrap()
    }

    #[test]
    fn empty_input_is_end_marker_plus_pad() {
        assert_eq!(b64(""), "Q");
        assert_eq!(compress(&[], &RawUnits), vec![0x4000]);
    }

    #[test]
    fn single_8bit_literal() {
        assert_eq!(b64("a"), "IZA");
    }

    #[test]
    fn single_16bit_literal() {
        assert_eq!(b64("€"), "jUEQ");
    }

    #[test]
    fn repeated_unit() {
        assert_eq!(b64("aaaaaa"), "IY1A");
    }

    #[test]
    fn known_strings() {
        assert_eq!(b64("hello world"), "BYUwNmD2AEDukCcwBMg");
        assert_eq!(b64("Hello, world!"), "BIUwNmD2A0AEDukBOYAmBCIA");
        assert_eq!(b64("abcabcabcabc"), "IYIwxqHpQ");
    }

    #[test]
    fn raw_symbols() {
        let units: Vec<u16> = "a".encode_utf16().collect();
        assert_eq!(compress(&units, &RawUnits), vec![8592]);
        let units: Vec<u16> = "ababababab".encode_utf16().collect();
        assert_eq!(compress(&units, &RawUnits), vec![8578, 13804, 18432]);
    }

    #[test]
    fn deterministic() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(20);
        assert_eq!(b64(&text), b64(&text));
    }
}
