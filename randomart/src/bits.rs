use std::fmt;

/// A 2-bit step token taken from one quarter of a byte.
///
/// The *first* bit is the high bit of the pair and steers the vertical
/// direction; the *second* bit is the low bit and steers the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPair(u8);

impl BitPair {
    /// Build a pair from the two low bits of `value`.
    pub fn new(value: u8) -> Self {
        BitPair(value & 0b11)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// High bit of the pair.
    pub fn first(self) -> bool {
        self.0 & 0b10 != 0
    }

    /// Low bit of the pair.
    pub fn second(self) -> bool {
        self.0 & 0b01 != 0
    }
}

impl fmt::Display for BitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02b}", self.0)
    }
}

/// Split one byte into its four bit-pairs in walk order.
///
/// Reading the byte MSB-first gives the groups at bit positions
/// 7-6, 5-4, 3-2, 1-0. The walk consumes them in reverse, so the
/// low-order pair comes first and the high-order pair last.
pub fn byte_pairs(byte: u8) -> [BitPair; 4] {
    let msb_first = [byte >> 6, byte >> 4, byte >> 2, byte].map(BitPair::new);
    let [a, b, c, d] = msb_first;
    [d, c, b, a]
}

/// Expand a byte sequence into the bit-pair sequence driving the walk.
///
/// Bytes are consumed left to right; within each byte pairs are
/// consumed right to left (see [`byte_pairs`]).
pub fn bit_pairs(bytes: &[u8]) -> Vec<BitPair> {
    let mut pairs = Vec::with_capacity(bytes.len() * 4);
    for &byte in bytes {
        pairs.extend(byte_pairs(byte));
    }
    pairs
}
