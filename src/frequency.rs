//! Frequency analysis for byte streams.
//!
//! Counts the occurrence of each byte value (0-255) in an input buffer.
//! The sorted record list produced here fixes the order in which symbols
//! enter tree construction, which makes encoder output reproducible
//! bit-for-bit.

/// A frequency table that tracks byte occurrence counts.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// Count of each byte value (index = byte value, value = count).
    pub byte: [u32; 256],
    /// Sum of all counts.
    pub total: u64,
    /// Number of distinct byte values with nonzero count.
    pub used: u32,
}

impl FrequencyTable {
    /// Create a new, zeroed frequency table.
    pub fn new() -> Self {
        Self {
            byte: [0u32; 256],
            total: 0,
            used: 0,
        }
    }

    /// Count byte frequencies in the input buffer, accumulating into
    /// any counts already present.
    pub fn count(&mut self, input: &[u8]) {
        for &b in input {
            self.byte[b as usize] += 1;
        }

        let mut total = 0u64;
        let mut used = 0u32;
        for &c in &self.byte {
            total += c as u64;
            used += (c > 0) as u32;
        }
        self.total = total;
        self.used = used;
    }

    /// Add a single occurrence of one byte value.
    ///
    /// Used by the encoder to account for the appended stream terminator
    /// without copying the input.
    pub fn add(&mut self, byte: u8) {
        if self.byte[byte as usize] == 0 {
            self.used += 1;
        }
        self.byte[byte as usize] += 1;
        self.total += 1;
    }

    /// Get the count for a specific byte value.
    pub fn get(&self, byte: u8) -> u32 {
        self.byte[byte as usize]
    }

    /// Compute the Shannon entropy of the distribution (in bits per symbol).
    ///
    /// Returns 0.0 if the table is empty.
    pub fn entropy(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f32;
        self.byte
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let prob = c as f32 / total;
                -prob * prob.log2()
            })
            .sum()
    }

    /// Return one `(symbol, count)` record per used byte value, ordered by
    /// `(count ascending, symbol ascending)`.
    ///
    /// This ordering is what tree construction consumes; it must stay fixed
    /// or two encoders would disagree on merge order for tied weights.
    pub fn sorted_records(&self) -> Vec<(u8, u32)> {
        let mut records: Vec<(u8, u32)> = self
            .byte
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(sym, &c)| (sym as u8, c))
            .collect();
        records.sort_by_key(|&(sym, count)| (count, sym));
        records
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: compute a frequency table from input.
pub fn get_frequency(input: &[u8]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    table.count(input);
    table
}
