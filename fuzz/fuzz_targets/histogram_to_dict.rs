#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use huffman_codec::canonical::canonicalize_huffman_dict;
use huffman_codec::dict::huffman_dict;
use huffman_codec::reverse::huffman_build_reverse_dict;
use huffman_codec::tree::huffman_tree;
use huffman_codec::{MAX_CODE_LEN, NUM_SYMBOLS};

#[derive(Arbitrary, Debug)]
struct FuzzCase {
    counts: Vec<u16>,
}

fuzz_target!(|case: FuzzCase| {
    let mut histogram = [0u64; NUM_SYMBOLS];
    for (slot, &count) in histogram.iter_mut().zip(case.counts.iter()) {
        *slot = count as u64;
    }

    let tree = huffman_tree(&histogram);
    let dict = canonicalize_huffman_dict(&huffman_dict(&tree));

    for symbol in 0..NUM_SYMBOLS {
        if histogram[symbol] > 0 {
            assert!(!dict[symbol].is_empty());
            assert!(dict[symbol].len <= MAX_CODE_LEN);
        } else {
            assert!(dict[symbol].is_empty());
        }
    }

    huffman_build_reverse_dict(&dict, MAX_CODE_LEN).expect("length-limited dict must fit the reverse table");
});
