//! Canonical Huffman code assignment.
//!
//! A canonical codebook is fully determined by each symbol's code length:
//! symbols are ordered `(length ascending, symbol ascending)`, the first
//! gets the all-zero code of its length, and each subsequent code is the
//! previous one plus one, shifted left by any length increase. Because the
//! rule is deterministic, the wire format only ever carries lengths and
//! both sides rebuild identical bit patterns.

use crate::{HuffError, HuffResult};

/// Maximum representable code length: lengths travel as 4-bit nibbles.
pub const MAX_CODE_BITS: u8 = 15;

/// One entry of a canonical codebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: u8,
    /// Code length in bits, 1..=15.
    pub bits: u8,
    /// Canonical code value, right-aligned in `bits` bits.
    pub code: u16,
}

/// Assign canonical codes for a set of `(symbol, length)` pairs.
///
/// Returns entries sorted in canonical `(length, symbol)` order — the same
/// order the serialized symbol list uses.
///
/// Fails with `InvalidFormat` if any length is zero or above
/// [`MAX_CODE_BITS`], or if the lengths oversubscribe the code space (more
/// codes of some length than `2^length` permits, a Kraft violation). Such
/// inputs can only come from a corrupt header; lengths derived from a real
/// tree always fit.
pub fn canonicalize(lengths: &[(u8, u8)]) -> HuffResult<Vec<CodeEntry>> {
    let mut entries: Vec<CodeEntry> = Vec::with_capacity(lengths.len());
    for &(symbol, bits) in lengths {
        if bits == 0 || bits > MAX_CODE_BITS {
            return Err(HuffError::InvalidFormat);
        }
        entries.push(CodeEntry {
            symbol,
            bits,
            code: 0,
        });
    }
    entries.sort_unstable_by_key(|e| (e.bits, e.symbol));

    let mut code: u32 = 0;
    for i in 0..entries.len() {
        if i > 0 {
            code += 1;
            let grow = entries[i].bits - entries[i - 1].bits;
            code <<= grow;
        }
        if code >> entries[i].bits != 0 {
            return Err(HuffError::InvalidFormat);
        }
        entries[i].code = code as u16;
    }

    Ok(entries)
}
