//! Per-message Huffman coding, built fresh from this message's own symbol
//! frequencies and serialized inline in the header (no canonical/shared
//! table survives between messages).
//!
//! Construction follows `SPEC_FULL.md` §4.5: repeated extraction of the two
//! minimum-weight nodes from a priority queue. Per the Design Notes (§9) we
//! keep the tree explicit (internal nodes with left/right children, an arena
//! addressed by index) and assign codes with a single post-build
//! depth-first walk, rather than the source's approach of carrying
//! concatenated subtree symbols through the queue and reversing each code at
//! the end.
//!
//! Absent children are `None` rather than a reserved index-0 sentinel — the
//! same "no pointer chasing, arena of indices" idea the Design Notes ask
//! for, expressed with Rust's native niche-optimized `Option<usize>` instead
//! of a magic index.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::bits::{BitReader, BitWriter};
use crate::Error;

struct Node {
    left: Option<usize>,
    right: Option<usize>,
    symbol: Option<u8>,
}

/// A symbol's frequency and code, in the order produced by tree construction.
pub struct HuffmanEncoder {
    /// `(symbol, code)` pairs in header-serialization order.
    table: Vec<(u8, Vec<bool>)>,
}

impl HuffmanEncoder {
    /// Builds a Huffman code from `(symbol, count)` pairs. `counts` must be
    /// nonempty and every count must be positive.
    pub fn build(counts: &[(u8, u32)]) -> Result<Self, Error> {
        if counts.is_empty() {
            return Err(Error::Internal("Huffman build requires at least one symbol"));
        }
        let mut arena: Vec<Node> = Vec::new();
        // Ties break by insertion order: the symbol/subtree seen earliest in
        // `counts` wins. This is a deterministic, testable total order, not
        // the sorted-by-symbol order the spec explicitly warns not to assume.
        let mut heap: BinaryHeap<Reverse<(u32, usize, usize)>> = BinaryHeap::new();
        for (seq, &(symbol, count)) in counts.iter().enumerate() {
            let idx = arena.len();
            arena.push(Node { left: None, right: None, symbol: Some(symbol) });
            heap.push(Reverse((count, seq, idx)));
        }
        let mut next_seq = counts.len();
        let root = if heap.len() == 1 {
            heap.pop().unwrap().0 .2
        } else {
            loop {
                let Reverse((w1, _, i1)) = heap.pop().expect("heap nonempty by loop invariant");
                let Reverse((w2, _, i2)) = heap.pop().expect("two elements required to merge");
                let idx = arena.len();
                arena.push(Node { left: Some(i1), right: Some(i2), symbol: None });
                heap.push(Reverse((w1 + w2, next_seq, idx)));
                next_seq += 1;
                if heap.len() == 1 {
                    break heap.pop().unwrap().0 .2;
                }
            }
        };

        let mut table = Vec::with_capacity(counts.len());
        let mut path = Vec::new();
        assign_codes(&arena, root, &mut path, &mut table);
        log::debug!("huffman build: {} distinct symbols", table.len());
        log::trace!(
            "huffman table: {:?}",
            table.iter().map(|(s, c)| (*s as char, c.len())).collect::<Vec<_>>()
        );
        Ok(Self { table })
    }

    /// `(symbol, code)` pairs, in header-serialization order.
    pub fn table(&self) -> &[(u8, Vec<bool>)] {
        &self.table
    }

    /// Looks up the code for `symbol`, or `None` if it wasn't in the
    /// frequency table passed to [`HuffmanEncoder::build`].
    pub fn code_for(&self, symbol: u8) -> Option<&[bool]> {
        self.table.iter().find(|(s, _)| *s == symbol).map(|(_, c)| c.as_slice())
    }

    pub fn encode_symbol(&self, writer: &mut BitWriter, symbol: u8) -> Result<(), Error> {
        let code = self
            .code_for(symbol)
            .ok_or(Error::Internal("symbol missing from Huffman table"))?;
        for &bit in code {
            writer.push_bit(bit);
        }
        Ok(())
    }
}

fn assign_codes(arena: &[Node], idx: usize, path: &mut Vec<bool>, out: &mut Vec<(u8, Vec<bool>)>) {
    let node = &arena[idx];
    if let Some(symbol) = node.symbol {
        // A lone symbol (no merges happened) still needs a nonempty code.
        let code = if path.is_empty() { vec![false] } else { path.clone() };
        out.push((symbol, code));
        return;
    }
    path.push(false);
    assign_codes(arena, node.left.unwrap(), path, out);
    path.pop();
    path.push(true);
    assign_codes(arena, node.right.unwrap(), path, out);
    path.pop();
}

/// The decoder's side of the trie: rebuilt from `(symbol, code)` pairs read
/// out of the header, then walked bit by bit during payload decode.
pub struct HuffmanDecoder {
    arena: Vec<Node>,
    root: usize,
}

impl HuffmanDecoder {
    /// Starts a fresh, empty trie (a single unlabeled root).
    pub fn new() -> Self {
        Self { arena: vec![Node { left: None, right: None, symbol: None }], root: 0 }
    }

    /// Inserts `symbol` at the path described by `code` (`false` = left,
    /// `true` = right), creating internal nodes as needed. Fails if the path
    /// would extend past an existing leaf, or land on a node that is already
    /// an internal node with children built for a *different* continuation
    /// (both indicate a corrupt header).
    pub fn insert(&mut self, symbol: u8, code: &[bool]) -> Result<(), Error> {
        if code.is_empty() {
            return Err(Error::DecodeStructural("Huffman code must be nonempty"));
        }
        let mut cur = self.root;
        for (depth, &bit) in code.iter().enumerate() {
            if self.arena[cur].symbol.is_some() {
                return Err(Error::DecodeStructural("Huffman code path collides with an existing leaf"));
            }
            let is_last = depth == code.len() - 1;
            let slot = if bit { self.arena[cur].right } else { self.arena[cur].left };
            cur = match slot {
                Some(next) => next,
                None => {
                    let idx = self.arena.len();
                    self.arena.push(Node { left: None, right: None, symbol: None });
                    if bit {
                        self.arena[cur].right = Some(idx);
                    } else {
                        self.arena[cur].left = Some(idx);
                    }
                    idx
                }
            };
            if is_last {
                let node = &mut self.arena[cur];
                if node.symbol.is_some() || node.left.is_some() || node.right.is_some() {
                    return Err(Error::DecodeStructural("Huffman code terminates on a non-leaf node"));
                }
                node.symbol = Some(symbol);
            }
        }
        Ok(())
    }

    /// Walks the trie from the root, consuming bits from `reader` starting
    /// at `pos`, until a leaf is reached. Returns the symbol and the
    /// position immediately following its code.
    pub fn decode_one(&self, reader: &BitReader, mut pos: usize) -> Result<(u8, usize), Error> {
        let mut cur = self.root;
        loop {
            if let Some(symbol) = self.arena[cur].symbol {
                return Ok((symbol, pos));
            }
            let bit = reader.bit_at(pos).map_err(|_| Error::DecodeTruncated("Huffman code"))?;
            pos += 1;
            cur = if bit { self.arena[cur].right } else { self.arena[cur].left }
                .ok_or(Error::DecodeStructural("Huffman trie has no such path"))?;
        }
    }
}

impl Default for HuffmanDecoder {
    fn default() -> Self {
        Self::new()
    }
}
