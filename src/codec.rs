//! The self-describing canonical-Huffman stream format.
//!
//! **Layout:**
//! - Byte 0: `N`, the count of distinct symbols.
//! - Bytes 1..=N: symbol values in canonical `(length, symbol)` order.
//! - Next `ceil(N/2)` bytes: code lengths packed two per byte as 4-bit
//!   nibbles, high nibble first; an odd `N` leaves the final low nibble
//!   zero.
//! - Payload: the canonical code for every input byte plus a trailing
//!   sentinel, packed MSB-first and zero-padded to the next byte boundary.
//!
//! The codebook is never transmitted as bit patterns. The decoder re-runs
//! the canonical assignment over the recovered `(symbol, length)` pairs
//! and rebuilds the exact codes, then walks the payload through a trie
//! until the sentinel appears.

use crate::bitio::{BitReader, BitWriter};
use crate::canonical::{canonicalize, CodeEntry, MAX_CODE_BITS};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use crate::{HuffError, HuffResult};

/// Logical end-of-content marker, coded like any other symbol.
///
/// A literal 0x00 in the input collides with it: decoding stops at the
/// first logical NUL, truncating anything after. Known limitation of the
/// format, not worked around here.
pub const SENTINEL: u8 = 0x00;

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode `input` into a self-describing artifact.
///
/// Accepts any byte sequence (see [`SENTINEL`] for the NUL caveat). Fails
/// with `LengthOverflow` if the frequency distribution produces a code
/// longer than 15 bits, which no nibble can carry.
pub fn encode(input: &[u8]) -> HuffResult<Vec<u8>> {
    let mut freq = FrequencyTable::new();
    freq.count(input);
    freq.add(SENTINEL);

    // The sentinel guarantees at least one record.
    let records = freq.sorted_records();
    let tree = HuffmanTree::from_records(&records).ok_or(HuffError::InvalidFormat)?;

    let raw = tree.raw_codes();
    if raw.iter().any(|c| c.bits > MAX_CODE_BITS) {
        return Err(HuffError::LengthOverflow);
    }

    let lengths: Vec<(u8, u8)> = raw.iter().map(|c| (c.symbol, c.bits)).collect();
    let book = canonicalize(&lengths)?;

    let mut out = write_header(&book);

    let mut lookup = [(0u16, 0u8); 256];
    for e in &book {
        lookup[e.symbol as usize] = (e.code, e.bits);
    }

    let mut writer = BitWriter::new();
    for &b in input.iter().chain(std::iter::once(&SENTINEL)) {
        let (code, bits) = lookup[b as usize];
        writer.push_code(code, bits);
    }
    out.extend_from_slice(&writer.finish());

    Ok(out)
}

/// Serialize the codebook header: `N`, symbol list, packed length nibbles.
fn write_header(book: &[CodeEntry]) -> Vec<u8> {
    let mut header = Vec::with_capacity(1 + book.len() + book.len().div_ceil(2));
    // A full 256-symbol alphabet (all byte values plus the sentinel)
    // wraps to 0; the decoder reads 0 back as 256.
    header.push(book.len() as u8);
    header.extend(book.iter().map(|e| e.symbol));
    for pair in book.chunks(2) {
        let lo = if pair.len() == 2 { pair[1].bits } else { 0 };
        header.push(pair[0].bits << 4 | lo);
    }

    header
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode an artifact produced by [`encode`].
///
/// Fails with `InvalidFormat` on truncated or corrupted input: an
/// inconsistent header, lengths that violate the canonical contract, a
/// payload that ends before the sentinel, or a bit walk that leaves the
/// code trie.
pub fn decode(data: &[u8]) -> HuffResult<Vec<u8>> {
    let (pairs, header_len) = parse_header(data)?;
    let book = canonicalize(&pairs)?;
    let trie = DecodeTree::from_codebook(&book)?;
    trie.decode_payload(&data[header_len..])
}

/// Summary of an encoded stream's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    /// Number of distinct symbols in the codebook.
    pub symbol_count: usize,
    /// Size of the header block in bytes.
    pub header_len: usize,
    /// Size of the bit-packed payload in bytes.
    pub payload_len: usize,
}

/// Parse just the header of an artifact, without decoding the payload.
pub fn info(data: &[u8]) -> HuffResult<StreamInfo> {
    let (pairs, header_len) = parse_header(data)?;
    Ok(StreamInfo {
        symbol_count: pairs.len(),
        header_len,
        payload_len: data.len() - header_len,
    })
}

/// Parse `N`, the symbol list, and the nibble block.
///
/// Returns the recovered `(symbol, length)` pairs and the total header
/// length in bytes. Length validation happens in the canonical stage.
fn parse_header(data: &[u8]) -> HuffResult<(Vec<(u8, u8)>, usize)> {
    let n = match data.first() {
        Some(&0) => 256,
        Some(&n) => n as usize,
        None => return Err(HuffError::InvalidFormat),
    };

    let header_len = 1 + n + n.div_ceil(2);
    if data.len() < header_len {
        return Err(HuffError::InvalidFormat);
    }

    let symbols = &data[1..1 + n];
    let nibbles = &data[1 + n..header_len];

    let mut pairs = Vec::with_capacity(n);
    for i in 0..n {
        let packed = nibbles[i / 2];
        let bits = if i % 2 == 0 { packed >> 4 } else { packed & 0x0F };
        pairs.push((symbols[i], bits));
    }

    Ok((pairs, header_len))
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    symbol: Option<u8>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Decode trie rebuilt from a canonical codebook.
///
/// Nodes live in a flat arena addressed by index; the root is node 0.
#[derive(Debug, Clone)]
struct DecodeTree {
    nodes: Vec<TrieNode>,
}

impl DecodeTree {
    /// Insert each code's bit path, creating internal nodes on demand.
    fn from_codebook(book: &[CodeEntry]) -> HuffResult<Self> {
        let mut nodes = vec![TrieNode::default()];

        for e in book {
            let mut node = 0usize;
            for i in (0..e.bits).rev() {
                if nodes[node].symbol.is_some() {
                    return Err(HuffError::InvalidFormat);
                }
                let bit = (e.code >> i) & 1 == 1;
                let slot = if bit { nodes[node].right } else { nodes[node].left };
                node = match slot {
                    Some(child) => child,
                    None => {
                        let child = nodes.len();
                        nodes.push(TrieNode::default());
                        if bit {
                            nodes[node].right = Some(child);
                        } else {
                            nodes[node].left = Some(child);
                        }
                        child
                    }
                };
            }
            if nodes[node].symbol.is_some() || nodes[node].left.is_some() || nodes[node].right.is_some() {
                return Err(HuffError::InvalidFormat);
            }
            nodes[node].symbol = Some(e.symbol);
        }

        Ok(DecodeTree { nodes })
    }

    /// Walk the payload bit by bit, emitting a symbol at each leaf, until
    /// the sentinel appears. Remaining bits are padding and are discarded.
    fn decode_payload(&self, payload: &[u8]) -> HuffResult<Vec<u8>> {
        let mut reader = BitReader::new(payload);
        let mut out = Vec::new();
        let mut node = 0usize;

        loop {
            // Running out of bits before the sentinel means the payload
            // was truncated.
            let bit = reader.read_bit().ok_or(HuffError::InvalidFormat)?;
            let next = if bit {
                self.nodes[node].right
            } else {
                self.nodes[node].left
            };
            node = next.ok_or(HuffError::InvalidFormat)?;

            match self.nodes[node].symbol {
                Some(SENTINEL) => return Ok(out),
                Some(sym) => {
                    out.push(sym);
                    node = 0;
                }
                None => {}
            }
        }
    }
}
