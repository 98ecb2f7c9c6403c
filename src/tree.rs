//! Huffman tree construction and raw code generation.
//!
//! The builder keeps an ascending-by-weight sequence of pending nodes and
//! repeatedly merges the two lightest. Re-insertion uses a linear scan for
//! the first bracketing pair rather than a priority queue: the insertion
//! position doubles as the tie-break for equal weights, and the resulting
//! tree shape is part of the wire contract (it decides the code-length
//! multiset the canonical stage serializes).

/// A node in the Huffman tree. Leaf iff both children are `None`.
#[derive(Debug, Clone)]
struct Node {
    /// Frequency weight of this node (or subtree).
    weight: u32,
    /// Byte value (only meaningful for leaf nodes).
    value: u8,
    /// Left child index.
    left: Option<usize>,
    /// Right child index.
    right: Option<usize>,
}

/// A raw prefix code produced by walking the tree.
///
/// Raw codes are path-dependent and never persisted; only `bits` survives
/// into the canonical stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCode {
    pub symbol: u8,
    /// Code bits, right-aligned. Meaningful only up to 32 bits; callers
    /// reject anything deeper long before that matters.
    pub code: u32,
    pub bits: u8,
}

/// A Huffman tree stored as a flat arena of index-addressed nodes.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Build a tree from `(symbol, count)` records.
    ///
    /// Records must already be ordered `(count ascending, symbol ascending)`
    /// as produced by `FrequencyTable::sorted_records`; the merge loop
    /// depends on that order for reproducible output.
    ///
    /// Returns `None` for an empty record list.
    pub fn from_records(records: &[(u8, u32)]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(records.len() * 2);
        let mut queue: Vec<usize> = Vec::with_capacity(records.len());
        for &(symbol, count) in records {
            queue.push(nodes.len());
            nodes.push(Node {
                weight: count,
                value: symbol,
                left: None,
                right: None,
            });
        }

        // A lone symbol still needs a 1-bit code, so hang the leaf off a
        // dummy internal root instead of letting the walk assign 0 bits.
        if queue.len() == 1 {
            let leaf = queue[0];
            let root = nodes.len();
            nodes.push(Node {
                weight: nodes[leaf].weight,
                value: 0,
                left: Some(leaf),
                right: None,
            });
            return Some(HuffmanTree { nodes, root });
        }

        while queue.len() > 1 {
            let left = queue[0];
            let right = queue[1];
            let weight = nodes[left].weight.saturating_add(nodes[right].weight);

            let merged = nodes.len();
            nodes.push(Node {
                weight,
                value: 0,
                left: Some(left),
                right: Some(right),
            });

            queue.drain(..2);
            let pos = Self::insert_position(&nodes, &queue, weight);
            queue.insert(pos, merged);
        }

        let root = queue[0];
        Some(HuffmanTree { nodes, root })
    }

    /// Find where a merged node of the given weight re-enters the queue.
    ///
    /// Scans low to high for the first adjacent pair that brackets the
    /// weight and inserts between them; lighter-than-head goes to the
    /// front, heavier-than-tail to the back. The end-of-queue fallback
    /// covers the all-weights-equal case, which the scan cannot place.
    fn insert_position(nodes: &[Node], queue: &[usize], weight: u32) -> usize {
        if queue.is_empty() {
            return 0;
        }
        if weight < nodes[queue[0]].weight {
            return 0;
        }
        if weight > nodes[queue[queue.len() - 1]].weight {
            return queue.len();
        }
        for i in 0..queue.len() - 1 {
            if nodes[queue[i]].weight <= weight && weight <= nodes[queue[i + 1]].weight {
                return i + 1;
            }
        }
        queue.len()
    }

    /// Walk the tree and return one raw code per leaf.
    ///
    /// Left edges append 0, right edges append 1.
    pub fn raw_codes(&self) -> Vec<RawCode> {
        let mut codes = Vec::new();
        Self::walk(&self.nodes, self.root, 0, 0, &mut codes);
        codes
    }

    fn walk(nodes: &[Node], idx: usize, prefix: u32, depth: u8, out: &mut Vec<RawCode>) {
        let node = &nodes[idx];
        if node.left.is_none() && node.right.is_none() {
            out.push(RawCode {
                symbol: node.value,
                code: prefix,
                bits: depth,
            });
            return;
        }
        if let Some(left) = node.left {
            Self::walk(nodes, left, prefix << 1, depth + 1, out);
        }
        if let Some(right) = node.right {
            Self::walk(nodes, right, (prefix << 1) | 1, depth + 1, out);
        }
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.left.is_none() && n.right.is_none())
            .count()
    }
}
