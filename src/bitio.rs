//! Bit-level packing and unpacking, MSB-first.
//!
//! The payload contract packs code bits most-significant-bit-first into
//! bytes and zero-pads the final byte on the right. Both halves here share
//! that orientation so a code written with `push_code` reads back bit by
//! bit in the same order.

/// Accumulates bits MSB-first into a byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    out: Vec<u8>,
    cur: u8,
    /// Bits used in `cur` (0..8).
    used: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.cur = (self.cur << 1) | bit as u8;
        self.used += 1;
        if self.used == 8 {
            self.out.push(self.cur);
            self.cur = 0;
            self.used = 0;
        }
    }

    /// Append the low `bits` bits of `code`, most significant first.
    pub fn push_code(&mut self, code: u16, bits: u8) {
        for i in (0..bits).rev() {
            self.push_bit((code >> i) & 1 == 1);
        }
    }

    /// Total number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.out.len() * 8 + self.used as usize
    }

    /// Flush, zero-padding the last byte on the right to the next byte
    /// boundary (0-7 pad bits), and return the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.used > 0 {
            self.out.push(self.cur << (8 - self.used));
        }
        self.out
    }
}

/// Reads bits MSB-first from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Byte position.
    pos: usize,
    /// Bit position within the current byte (0..8).
    bit: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        BitReader { data, pos: 0, bit: 0 }
    }

    /// Read the next bit, or `None` once the input is exhausted.
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.pos >= self.data.len() {
            return None;
        }
        let bit = (self.data[self.pos] >> (7 - self.bit)) & 1;
        self.bit += 1;
        if self.bit == 8 {
            self.bit = 0;
            self.pos += 1;
        }
        Some(bit == 1)
    }
}
