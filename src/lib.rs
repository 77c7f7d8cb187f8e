//! Byte-oriented Huffman compression.
//!
//! This crate implements a full encode/decode pipeline over byte buffers and
//! files: frequency histogramming, canonical Huffman tree construction,
//! bit-level encoding (sequential and two parallel variants), table-driven
//! decoding, and a persistent container format for round-tripping files.
//!
//! The alphabet is fixed at 256 symbols (one per byte value) and code
//! lengths are bounded by [`MAX_CODE_LEN`], which in turn bounds the size of
//! the decoder's flat lookup table.

pub mod bitio;
pub mod canonical;
pub mod config;
pub mod decode;
pub mod dict;
pub mod encode;
pub mod error;
pub mod file;
pub mod histogram;
pub mod reverse;
pub mod size;
pub mod tree;

/// Maximum permitted Huffman code length, in bits.
///
/// The decoder's reverse dictionary has `2^MAX_CODE_LEN` entries, so this
/// value bounds both decode table size and the length-limiting pass applied
/// during dictionary derivation.
pub const MAX_CODE_LEN: u32 = 16;

/// Number of symbols in the alphabet (one per byte value).
pub const NUM_SYMBOLS: usize = 256;

/// Size in bytes of the fixed container header: 8 bytes for the original
/// payload length plus 256 eight-byte histogram counts.
pub const HUFFMAN_HEADER_SIZE: usize = 8 + NUM_SYMBOLS * 8;

/// Convenience re-exports for the common entry points of the crate.
pub mod prelude {
    pub use crate::bitio::{BitReader, BitWriter};
    pub use crate::canonical::{canonicalize_huffman_dict, next_canonical_huffman_code};
    pub use crate::config::CodecConfig;
    pub use crate::decode::huffman_decode_span;
    pub use crate::dict::huffman_dict;
    pub use crate::encode::{
        huffman_encode_span, huffman_encode_span_parallel, huffman_encode_span_parallel_twopass,
    };
    pub use crate::error::CodecError;
    pub use crate::file::{huffman_decode_file, huffman_encode_file, FileCodec};
    pub use crate::histogram::{
        histogram, histogram_fast, histogram_parallel, histogram_parallel_64,
    };
    pub use crate::reverse::huffman_build_reverse_dict;
    pub use crate::size::calculate_compressed_size_in_bits;
    pub use crate::tree::{huffman_tree, HuffmanNode, HuffmanTree};
    pub use crate::{HUFFMAN_HEADER_SIZE, MAX_CODE_LEN, NUM_SYMBOLS};
}
