use crate::tools::alphabet::Alphabet;

/// Packs bits MSB-first into fixed-width symbols. Each time a symbol fills up it is mapped
/// through the alphabet and appended to the output.
pub struct BitSink<'a, A: Alphabet> {
    /// Maps completed symbols to output units.
    alphabet: &'a A,
    /// Completed symbols.
    output: Vec<u16>,
    /// Bits of the symbol currently being filled.
    value: u32,
    /// Count of bits already in `value` (0..BITS-1).
    position: u32,
}

impl<'a, A: Alphabet> BitSink<'a, A> {
    /// Create a new BitSink. `capacity` is a hint for the number of output symbols.
    pub fn new(alphabet: &'a A, capacity: usize) -> Self {
        Self {
            alphabet,
            output: Vec::with_capacity(capacity),
            value: 0,
            position: 0,
        }
    }

    /// Push a single bit (only the lowest bit of `bit` is used).
    pub fn push_bit(&mut self, bit: u32) {
        self.value = (self.value << 1) | (bit & 1);
        self.close_symbol();
    }

    /// Write the lowest `width` bits of `value`, least significant bit first.
    pub fn write_bits(&mut self, mut value: u32, width: u32) {
        for _ in 0..width {
            self.push_bit(value & 1);
            value >>= 1;
        }
    }

    /// Emit the symbol if it is full, otherwise advance the position.
    fn close_symbol(&mut self) {
        if self.position == A::BITS - 1 {
            self.output.push(self.alphabet.symbol(self.value));
            self.position = 0;
            self.value = 0;
        } else {
            self.position += 1;
        }
    }

    /// Pad with zero bits up to the next symbol boundary and return the symbols.
    /// A sink that is already aligned still emits one all-zero symbol, which is what every
    /// compatible encoder does.
    pub fn finish(mut self) -> Vec<u16> {
        loop {
            self.value <<= 1;
            if self.position == A::BITS - 1 {
                self.output.push(self.alphabet.symbol(self.value));
                break;
            }
            self.position += 1;
        }
        self.output
    }

    /// Debugging function. Report position as symbols.bits written so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.output.len(), self.position)
    }
}
