//! Table-driven decoding against a flat reverse dictionary.
use crate::bitio::BitReader;
use crate::dict::Dict;
use crate::error::{CodecError, Result};
use crate::MAX_CODE_LEN;

/// Decodes `total_bits` worth of packed codes from `src` into `dst`, using
/// `dict` for code lengths and `reverse` (built by
/// [`crate::reverse::huffman_build_reverse_dict`]) to resolve each
/// `MAX_CODE_LEN`-bit window to a symbol. Returns the number of symbols
/// decoded.
///
/// At each step the full `MAX_CODE_LEN`-bit window at the cursor is peeked
/// (reading past `total_bits` into trailing pad bits near end of stream is
/// expected and harmless; only the code's own length is ever consumed),
/// resolved to a symbol via `reverse`, and the cursor advances by that
/// symbol's code length in `dict`.
pub fn huffman_decode_span(
    src: &[u8],
    total_bits: u64,
    dst: &mut [u8],
    dict: &Dict,
    reverse: &[u8],
) -> Result<usize> {
    if reverse.len() != 1usize << MAX_CODE_LEN {
        return Err(CodecError::InvalidArgument(format!(
            "reverse dictionary must have {} entries, got {}",
            1usize << MAX_CODE_LEN,
            reverse.len()
        )));
    }

    let mut reader = BitReader::new(src, total_bits as usize);
    let mut count = 0usize;

    while !reader.done() {
        let window = reader.peek(MAX_CODE_LEN);
        let symbol = reverse[window as usize];
        let len = dict[symbol as usize].len;
        if len == 0 {
            return Err(CodecError::Format(
                "reverse dictionary resolved to a symbol with no code".into(),
            ));
        }

        if count >= dst.len() {
            return Err(CodecError::InvalidArgument(
                "output buffer too small for decoded data".into(),
            ));
        }
        dst[count] = symbol;
        count += 1;
        reader.advance(len);
    }

    Ok(count)
}
