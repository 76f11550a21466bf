/// Codes 0, 1 and 2 are reserved. On the wire they are plain integers like every other code,
/// so they are given names here before the rest of the codec looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// An 8 bit literal follows.
    Literal8,
    /// A 16 bit literal follows.
    Literal16,
    /// End of stream.
    EndOfStream,
    /// Index of a dictionary entry (always 3 or more).
    Entry(u32),
}

impl Code {
    /// First code handed out to a dictionary entry.
    pub const FIRST_ENTRY: u32 = 3;

    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Code::Literal8,
            1 => Code::Literal16,
            2 => Code::EndOfStream,
            n => Code::Entry(n),
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            Code::Literal8 => 0,
            Code::Literal16 => 1,
            Code::EndOfStream => 2,
            Code::Entry(n) => n,
        }
    }

    /// The literal marker needed for a unit, and the width of the literal that follows it.
    pub fn literal_for(unit: u16) -> (Self, u32) {
        if unit < 256 {
            (Code::Literal8, 8)
        } else {
            (Code::Literal16, 16)
        }
    }
}

/// Current code width and the countdown to its next increase. Encoder and decoder each own
/// one and must tick it at exactly the same points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWidth {
    /// Bits used to write one code.
    pub bits: u32,
    /// Dictionary insertions left before `bits` grows.
    pub enlarge_in: u32,
}

impl CodeWidth {
    /// Width state at the start of compression (dictionary holds only the reserved codes).
    pub fn for_compress() -> Self {
        Self {
            bits: 2,
            enlarge_in: 2,
        }
    }

    /// Width state right after the decoder's bootstrap literal.
    pub fn after_bootstrap() -> Self {
        Self {
            bits: 3,
            enlarge_in: 4,
        }
    }

    /// Count one dictionary growth step, widening codes when the countdown runs out.
    pub fn tick(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.bits;
            self.bits += 1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reserved_codes() {
        assert_eq!(Code::from_raw(0), Code::Literal8);
        assert_eq!(Code::from_raw(1), Code::Literal16);
        assert_eq!(Code::from_raw(2), Code::EndOfStream);
        assert_eq!(Code::from_raw(3), Code::Entry(Code::FIRST_ENTRY));
        for raw in 0..10 {
            assert_eq!(Code::from_raw(raw).raw(), raw);
        }
    }

    #[test]
    fn literal_width() {
        assert_eq!(Code::literal_for('a' as u16), (Code::Literal8, 8));
        assert_eq!(Code::literal_for(255), (Code::Literal8, 8));
        assert_eq!(Code::literal_for(256), (Code::Literal16, 16));
        assert_eq!(Code::literal_for('€' as u16), (Code::Literal16, 16));
    }

    #[test]
    fn width_grows_on_powers_of_two() {
        let mut width = CodeWidth::for_compress();
        width.tick();
        assert_eq!(width, CodeWidth { bits: 2, enlarge_in: 1 });
        width.tick();
        assert_eq!(width, CodeWidth { bits: 3, enlarge_in: 4 });
        assert_eq!(width, CodeWidth::after_bootstrap());
        for _ in 0..4 {
            width.tick();
        }
        assert_eq!(width, CodeWidth { bits: 4, enlarge_in: 8 });
    }
}
