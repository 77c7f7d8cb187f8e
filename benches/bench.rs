use bencher::{benchmark_group, benchmark_main, Bencher};

use huffman_codec::prelude::*;

fn sample_data() -> Vec<u8> {
    (0..1_000_000u32).map(|i| ((i * 2654435761) >> 16) as u8).collect()
}

fn histogram_scalar_bench(bench: &mut Bencher) {
    let data = sample_data();
    bench.iter(|| {
        let h = histogram(&data);
        std::hint::black_box(h);
    });
}

fn histogram_parallel_bench(bench: &mut Bencher) {
    let data = sample_data();
    let config = CodecConfig::default();
    bench.iter(|| {
        let h = histogram_parallel(&data, config);
        std::hint::black_box(h);
    });
}

fn histogram_fast_bench(bench: &mut Bencher) {
    let data = sample_data();
    let config = CodecConfig::default();
    bench.iter(|| {
        let h = histogram_fast(&data, config);
        std::hint::black_box(h);
    });
}

fn encode_sequential_bench(bench: &mut Bencher) {
    let data = sample_data();
    let hist = histogram(&data);
    let dict = canonicalize_huffman_dict(&huffman_dict(&huffman_tree(&hist)));
    let bits = calculate_compressed_size_in_bits(&hist, &dict);
    let mut dst = vec![0u8; ((bits + 7) / 8) as usize];

    bench.iter(|| {
        dst.iter_mut().for_each(|b| *b = 0);
        let written = huffman_encode_span(&data, &mut dst, &dict).expect("encode");
        std::hint::black_box(written);
    });
}

fn encode_parallel_twopass_bench(bench: &mut Bencher) {
    let data = sample_data();
    let hist = histogram(&data);
    let dict = canonicalize_huffman_dict(&huffman_dict(&huffman_tree(&hist)));
    let bits = calculate_compressed_size_in_bits(&hist, &dict);
    let mut dst = vec![0u8; ((bits + 7) / 8) as usize];
    let config = CodecConfig::default();

    bench.iter(|| {
        dst.iter_mut().for_each(|b| *b = 0);
        let written =
            huffman_encode_span_parallel_twopass(&data, &mut dst, &dict, config).expect("encode");
        std::hint::black_box(written);
    });
}

fn decode_bench(bench: &mut Bencher) {
    let data = sample_data();
    let hist = histogram(&data);
    let dict = canonicalize_huffman_dict(&huffman_dict(&huffman_tree(&hist)));
    let bits = calculate_compressed_size_in_bits(&hist, &dict);
    let mut encoded = vec![0u8; ((bits + 7) / 8) as usize];
    huffman_encode_span(&data, &mut encoded, &dict).expect("encode");
    let reverse = huffman_build_reverse_dict(&dict, MAX_CODE_LEN).expect("reverse dict");
    let mut decoded = vec![0u8; data.len()];

    bench.iter(|| {
        let count =
            huffman_decode_span(&encoded, bits, &mut decoded, &dict, &reverse).expect("decode");
        std::hint::black_box(count);
    });
}

benchmark_group!(
    benches,
    histogram_scalar_bench,
    histogram_parallel_bench,
    histogram_fast_bench,
    encode_sequential_bench,
    encode_parallel_twopass_bench,
    decode_bench
);
benchmark_main!(benches);
