//! Canonicalization of a Huffman dictionary into canonical form.
//!
//! Canonical codes are the wire contract: storing a histogram in the file
//! header and rebuilding the canonical dictionary at decode time (see
//! [`crate::file`]) is cheaper than storing codes directly, and guarantees
//! the encoder and decoder agree as long as both canonicalize the same way.
use crate::dict::{Code, Dict};
use crate::NUM_SYMBOLS;

/// Rewrites `dict` into canonical form, preserving every entry's code
/// length: active symbols are sorted by `(length ascending, symbol
/// ascending)`; the first gets the all-zeros code of its length, and each
/// subsequent one is the numeric successor of the previous code
/// ([`next_canonical_huffman_code`]), left-shifted (zero-padded) up to its
/// own length if that is longer.
pub fn canonicalize_huffman_dict(dict: &Dict) -> Dict {
    let mut lengths = [0u32; NUM_SYMBOLS];
    for (i, code) in dict.iter().enumerate() {
        lengths[i] = code.len;
    }
    assign_codes_for_lengths(&lengths)
}

/// Builds a valid canonical dictionary directly from a 256-entry length
/// table (zero meaning "no code"), without reference to any particular
/// tree. This is the single code-assignment routine both
/// [`canonicalize_huffman_dict`] and [`crate::dict::huffman_dict`]'s
/// length-limiting fallback rely on, so canonical assignment only has one
/// implementation to keep synchronized between encoder and decoder.
pub(crate) fn assign_codes_for_lengths(lengths: &[u32; NUM_SYMBOLS]) -> Dict {
    let mut dict = [Code::EMPTY; NUM_SYMBOLS];

    let mut active: Vec<u8> = (0..NUM_SYMBOLS)
        .filter(|&s| lengths[s] > 0)
        .map(|s| s as u8)
        .collect();
    active.sort_by_key(|&s| (lengths[s as usize], s));

    let Some((&first, rest)) = active.split_first() else {
        return dict;
    };

    let mut current = Code {
        bits: 0,
        len: lengths[first as usize],
    };
    dict[first as usize] = current;

    for &symbol in rest {
        let target_len = lengths[symbol as usize];
        let mut next_code = next_canonical_huffman_code(current);
        if next_code.len < target_len {
            next_code.bits <<= target_len - next_code.len;
            next_code.len = target_len;
        }
        current = next_code;
        dict[symbol as usize] = current;
    }

    dict
}

/// Returns the canonical successor of `code`: the bit sequence representing
/// `(code as unsigned integer) + 1`. If `code` is all-ones, the successor
/// is one bit longer (`1` followed by `code.len` zeros), since incrementing
/// an all-ones value of `n` bits overflows into the `n+1`th bit.
pub fn next_canonical_huffman_code(code: Code) -> Code {
    debug_assert!(code.len >= 1, "next_canonical_huffman_code requires a non-empty code");
    let max_value = (1u32 << code.len) - 1;
    if code.bits == max_value {
        Code {
            bits: 1 << code.len,
            len: code.len + 1,
        }
    } else {
        Code {
            bits: code.bits + 1,
            len: code.len,
        }
    }
}
