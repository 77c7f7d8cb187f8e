#![no_main]
use libfuzzer_sys::fuzz_target;

use huffman_codec::file::FileCodec;

fuzz_target!(|data: &[u8]| {
    let codec = FileCodec::default();
    let container = codec.encode(data).expect("encode never fails on arbitrary bytes");
    let decoded = codec.decode(&container).expect("a container we just produced must decode");
    assert_eq!(decoded, data);
});
