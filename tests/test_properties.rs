//! Property-based tests over the full histogram -> tree -> dict ->
//! canonicalize -> encode -> decode pipeline, run against randomly
//! generated byte spans rather than hand-picked fixtures.
use proptest::prelude::*;

use huffman_codec::canonical::canonicalize_huffman_dict;
use huffman_codec::config::CodecConfig;
use huffman_codec::decode::huffman_decode_span;
use huffman_codec::dict::{huffman_dict, Dict};
use huffman_codec::encode::{
    huffman_encode_span, huffman_encode_span_parallel, huffman_encode_span_parallel_twopass,
};
use huffman_codec::histogram::histogram;
use huffman_codec::reverse::huffman_build_reverse_dict;
use huffman_codec::size::{bits_to_bytes, calculate_compressed_size_in_bits};
use huffman_codec::tree::huffman_tree;
use huffman_codec::{MAX_CODE_LEN, NUM_SYMBOLS};

fn build(data: &[u8]) -> (Dict, [u64; NUM_SYMBOLS]) {
    let hist = histogram(data);
    let dict = canonicalize_huffman_dict(&huffman_dict(&huffman_tree(&hist)));
    (dict, hist)
}

fn assert_prefix_free(dict: &Dict) {
    let active: Vec<_> = (0..NUM_SYMBOLS).filter(|&s| !dict[s].is_empty()).collect();
    for &i in &active {
        for &j in &active {
            if i == j {
                continue;
            }
            let a = dict[i];
            let b = dict[j];
            if a.len <= b.len {
                let prefix = b.bits >> (b.len - a.len);
                assert_ne!(prefix, a.bits, "code for {i} is a prefix of code for {j}");
            }
        }
    }
}

proptest! {
    #[test]
    fn every_present_symbol_has_a_bounded_length_code(data: Vec<u8>) {
        let (dict, hist) = build(&data);
        for symbol in 0..NUM_SYMBOLS {
            if hist[symbol] > 0 {
                prop_assert!(!dict[symbol].is_empty());
                prop_assert!(dict[symbol].len <= MAX_CODE_LEN);
            } else {
                prop_assert!(dict[symbol].is_empty());
            }
        }
    }

    #[test]
    fn codes_are_prefix_free(data: Vec<u8>) {
        let (dict, _) = build(&data);
        assert_prefix_free(&dict);
    }

    #[test]
    fn sequential_encode_decode_round_trips(data: Vec<u8>) {
        let (dict, hist) = build(&data);
        let bits = calculate_compressed_size_in_bits(&hist, &dict);
        let mut encoded = vec![0u8; bits_to_bytes(bits) as usize];
        let written = huffman_encode_span(&data, &mut encoded, &dict).unwrap();
        prop_assert_eq!(written, bits);

        let reverse = huffman_build_reverse_dict(&dict, MAX_CODE_LEN).unwrap();
        let mut decoded = vec![0u8; data.len()];
        let count = huffman_decode_span(&encoded, bits, &mut decoded, &dict, &reverse).unwrap();
        prop_assert_eq!(count, data.len());
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn parallel_variants_are_byte_identical_to_sequential(
        data: Vec<u8>,
        threads in 1usize..9,
    ) {
        let (dict, hist) = build(&data);
        let bits = calculate_compressed_size_in_bits(&hist, &dict);
        let len = bits_to_bytes(bits) as usize;
        let config = CodecConfig::with_threads(threads);

        let mut seq = vec![0u8; len];
        huffman_encode_span(&data, &mut seq, &dict).unwrap();

        let mut par = vec![0u8; len];
        huffman_encode_span_parallel(&data, &mut par, &dict, config).unwrap();
        prop_assert_eq!(&seq, &par);

        let mut two = vec![0u8; len];
        huffman_encode_span_parallel_twopass(&data, &mut two, &dict, config).unwrap();
        prop_assert_eq!(&seq, &two);
    }

    #[test]
    fn compressed_size_matches_actual_bits_written(data: Vec<u8>) {
        let (dict, hist) = build(&data);
        let predicted = calculate_compressed_size_in_bits(&hist, &dict);
        let mut encoded = vec![0u8; bits_to_bytes(predicted) as usize];
        let actual = huffman_encode_span(&data, &mut encoded, &dict).unwrap();
        prop_assert_eq!(predicted, actual);
    }
}
