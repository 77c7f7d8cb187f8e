//! Exact output size computation from a histogram and dictionary.
use crate::dict::Dict;
use crate::NUM_SYMBOLS;

/// Computes the exact number of bits an encoded span will occupy:
/// `Σ histogram[s] * len(dict[s])`.
///
/// The encoder uses `ceil(bits / 8)` to size its output buffer.
pub fn calculate_compressed_size_in_bits(histogram: &[u64; NUM_SYMBOLS], dict: &Dict) -> u64 {
    histogram
        .iter()
        .zip(dict.iter())
        .map(|(&count, code)| count * code.len as u64)
        .sum()
}

/// `ceil(bits / 8)`, the number of bytes needed to hold `bits` packed bits.
#[inline]
pub fn bits_to_bytes(bits: u64) -> u64 {
    (bits + 7) / 8
}
