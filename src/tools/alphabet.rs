//! Symbol alphabets. An alphabet maps the fixed-width codes packed by the bit stream to the
//! symbols (UTF-16 units) that make up the encoded text, and back again.

const BASE64_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URI_SAFE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-";

/// Marks an ASCII byte that is not part of a table.
const NOT_IN_TABLE: u8 = 0xff;

/// Base64 pad character. It carries no bits.
pub const PAD: u8 = b'=';

/// Slot 64 of the URI-safe alphabet. Never emitted, read as zero bits like `PAD`.
pub const URI_SAFE_PAD: u8 = b'$';

/// Pure, stateless mapping between codes and output symbols.
pub trait Alphabet {
    /// Bits carried by one symbol.
    const BITS: u32;

    /// Returns the symbol for `code`. The bit sink only ever passes codes below `2^BITS`.
    fn symbol(&self, code: u32) -> u16;

    /// Returns the code carried by `symbol`, or None if the symbol is foreign to this alphabet.
    fn code(&self, symbol: u16) -> Option<u32>;
}

/// Builds the ASCII -> index table for a 64 symbol alphabet.
const fn reverse(table: &[u8; 64]) -> [u8; 128] {
    let mut rev = [NOT_IN_TABLE; 128];
    let mut i = 0;
    while i < 64 {
        rev[table[i] as usize] = i as u8;
        i += 1;
    }
    rev
}

const BASE64_REVERSE: [u8; 128] = reverse(BASE64_TABLE);
const URI_SAFE_REVERSE: [u8; 128] = reverse(URI_SAFE_TABLE);

fn lookup(rev: &[u8; 128], symbol: u16) -> Option<u32> {
    match rev.get(symbol as usize) {
        Some(&idx) if idx != NOT_IN_TABLE => Some(idx as u32),
        _ => None,
    }
}

/// Standard base64 alphabet, `=` accepted as padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl Alphabet for Base64 {
    const BITS: u32 = 6;

    fn symbol(&self, code: u32) -> u16 {
        BASE64_TABLE[code as usize & 0x3f] as u16
    }

    fn code(&self, symbol: u16) -> Option<u32> {
        if symbol == PAD as u16 {
            return Some(0);
        }
        lookup(&BASE64_REVERSE, symbol)
    }
}

/// Base64 variant that survives URI component encoding (`-` and `$` replace `/` and `=`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UriSafe;

impl Alphabet for UriSafe {
    const BITS: u32 = 6;

    fn symbol(&self, code: u32) -> u16 {
        URI_SAFE_TABLE[code as usize & 0x3f] as u16
    }

    fn code(&self, symbol: u16) -> Option<u32> {
        if symbol == URI_SAFE_PAD as u16 {
            return Some(0);
        }
        lookup(&URI_SAFE_REVERSE, symbol)
    }
}

/// 15 bit codes offset by 32, so every symbol is a printable, non-surrogate UTF-16 unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Printable;

impl Utf16Printable {
    const OFFSET: u16 = 32;
}

impl Alphabet for Utf16Printable {
    const BITS: u32 = 15;

    fn symbol(&self, code: u32) -> u16 {
        (code & 0x7fff) as u16 + Self::OFFSET
    }

    fn code(&self, symbol: u16) -> Option<u32> {
        match symbol.checked_sub(Self::OFFSET) {
            Some(code) if code <= 0x7fff => Some(code as u32),
            _ => None,
        }
    }
}

/// Identity mapping over full 16 bit units.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawUnits;

impl Alphabet for RawUnits {
    const BITS: u32 = 16;

    fn symbol(&self, code: u32) -> u16 {
        code as u16
    }

    fn code(&self, symbol: u16) -> Option<u32> {
        Some(symbol as u32)
    }
}
