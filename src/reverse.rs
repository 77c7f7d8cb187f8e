//! Flat reverse-lookup table for table-driven decoding.
use crate::dict::Dict;
use crate::error::{CodecError, Result};
use crate::NUM_SYMBOLS;

/// Builds a `2^max_len`-entry table mapping every possible `max_len`-bit
/// MSB-first window to the symbol whose code is a prefix of that window.
///
/// For a symbol with an `n`-bit code, every window whose top `n` bits equal
/// the code (regardless of the remaining `max_len - n` low bits, which
/// belong to whatever follows in the stream) maps to that symbol, so each
/// active code fills `2^(max_len - n)` contiguous entries. Fails if any
/// code exceeds `max_len` bits, which [`crate::dict::limit_code_lengths`]
/// should already have prevented.
pub fn huffman_build_reverse_dict(dict: &Dict, max_len: u32) -> Result<Vec<u8>> {
    let mut table = vec![0u8; 1usize << max_len];

    for symbol in 0..NUM_SYMBOLS {
        let code = dict[symbol];
        if code.is_empty() {
            continue;
        }
        if code.len > max_len {
            return Err(CodecError::CodeLengthOverflow {
                symbol: symbol as u8,
                len: code.len,
            });
        }
        let shift = max_len - code.len;
        let base = (code.bits as usize) << shift;
        let span = 1usize << shift;
        table[base..base + span].fill(symbol as u8);
    }

    Ok(table)
}
