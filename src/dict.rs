//! Per-symbol Huffman code derivation, with length limiting.
use crate::tree::HuffmanTree;
use crate::{MAX_CODE_LEN, NUM_SYMBOLS};

/// A Huffman code: `len` bits of `bits`, right-aligned, MSB-first when
/// written to a bitstream. `len == 0` represents "no code" (the symbol
/// never occurs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    pub bits: u32,
    pub len: u32,
}

impl Code {
    /// An empty code, used for symbols absent from the histogram.
    pub const EMPTY: Code = Code { bits: 0, len: 0 };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Fixed 256-entry code table. Entries for symbols with zero histogram
/// count are [`Code::EMPTY`].
pub type Dict = [Code; NUM_SYMBOLS];

/// Derives per-symbol codes from a [`HuffmanTree`] by depth-first walk:
/// a left edge appends bit 0, a right edge appends bit 1, and each leaf's
/// accumulated path is its code.
///
/// An empty tree yields 256 empty codes. A tree with a single leaf (the
/// degenerate one-distinct-symbol case) yields a single-bit code (`0`) for
/// that symbol rather than a zero-length code.
///
/// If the tree's natural depth would exceed [`MAX_CODE_LEN`], lengths are
/// length-limited (see [`limit_code_lengths`]) and codes are rebuilt from
/// the limited lengths via the same construction
/// [`crate::canonical::assign_codes_for_lengths`] uses, since once lengths
/// change the original DFS bit patterns no longer form a valid prefix code
/// anyway ([`crate::canonical::canonicalize_huffman_dict`] will rebuild
/// the wire-format codes from scratch regardless).
pub fn huffman_dict(tree: &HuffmanTree) -> Dict {
    let mut dict = [Code::EMPTY; NUM_SYMBOLS];

    let Some(root) = tree.root else {
        return dict;
    };

    if tree.nodes.len() == 1 {
        let symbol = tree.nodes[root].symbol.expect("single node must be a leaf");
        dict[symbol as usize] = Code { bits: 0, len: 1 };
        return dict;
    }

    let mut stack = vec![(root, 0u32, 0u32)];
    while let Some((idx, bits, len)) = stack.pop() {
        let node = tree.nodes[idx];
        if node.is_leaf() {
            dict[node.symbol.unwrap() as usize] = Code { bits, len };
        } else {
            stack.push((node.left.unwrap(), bits << 1, len + 1));
            stack.push((node.right.unwrap(), (bits << 1) | 1, len + 1));
        }
    }

    let mut lengths = [0u32; NUM_SYMBOLS];
    for (i, code) in dict.iter().enumerate() {
        lengths[i] = code.len;
    }

    if limit_code_lengths(&mut lengths, MAX_CODE_LEN) {
        dict = crate::canonical::assign_codes_for_lengths(&lengths);
    }

    dict
}

/// Clamps a 256-entry length table so that no entry exceeds `max_len`,
/// while preserving a valid Kraft-equality prefix-code length assignment.
/// Returns `true` if any length was changed.
///
/// Lengths that exceed `max_len` are first clamped down to it; the
/// resulting Kraft-sum excess is then paid back by repeatedly lengthening
/// the shallowest available codeword by one bit, the standard
/// length-limiting fixup used by DEFLATE-family encoders (see
/// `examples/SnowflakePowered-chd-rs/chd-rs/src/huffman.rs::assign_canonical_codes`
/// for the sibling technique of deriving codes from a length histogram,
/// which this routine also relies on for the final reassignment).
pub fn limit_code_lengths(lengths: &mut [u32; NUM_SYMBOLS], max_len: u32) -> bool {
    let max_observed = *lengths.iter().max().unwrap_or(&0);
    if max_observed <= max_len {
        return false;
    }

    let mut bl_count = vec![0u32; (max_observed + 1) as usize];
    for &l in lengths.iter() {
        if l > 0 {
            bl_count[l as usize] += 1;
        }
    }

    let mut overflow: i64 = 0;
    for bits in ((max_len + 1)..=max_observed).rev() {
        overflow += bl_count[bits as usize] as i64;
        bl_count[bits as usize] = 0;
    }
    bl_count[max_len as usize] += overflow as u32;

    while overflow > 0 {
        let mut bits = max_len - 1;
        while bits > 0 && bl_count[bits as usize] == 0 {
            bits -= 1;
        }
        assert!(bits > 0, "no Kraft budget left to pay back overflow");
        bl_count[bits as usize] -= 1;
        bl_count[(bits + 1) as usize] += 2;
        bl_count[max_len as usize] -= 1;
        overflow -= 2;
    }

    // Reassign lengths: symbols keep their relative order (by original
    // length, then by symbol value) and consume the new length histogram
    // from shortest to longest.
    let mut entries: Vec<(u8, u32)> = (0..NUM_SYMBOLS)
        .filter(|&s| lengths[s] > 0)
        .map(|s| (s as u8, lengths[s]))
        .collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut idx = 0;
    for len in 1..=max_len {
        let count = bl_count[len as usize];
        for _ in 0..count {
            let (symbol, _) = entries[idx];
            lengths[symbol as usize] = len;
            idx += 1;
        }
    }
    debug_assert_eq!(idx, entries.len());
    true
}
