//! Fixed-format container: a histogram header plus a packed bitstream.
//!
//! Layout (all integers little-endian): an 8-byte original payload length,
//! followed by 256 eight-byte histogram counts (one per byte value, in
//! symbol order), followed by the packed Huffman bitstream.
//! [`crate::HUFFMAN_HEADER_SIZE`] is the fixed size of the first two
//! fields combined. Storing the histogram rather than the codes means the
//! decoder only needs to rebuild the same canonical dictionary the encoder
//! built, as long as both sides canonicalize identically (which
//! [`crate::canonical::canonicalize_huffman_dict`] guarantees).
use std::fs;
use std::io::Write as _;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use crate::canonical::canonicalize_huffman_dict;
use crate::config::CodecConfig;
use crate::decode::huffman_decode_span;
use crate::dict::huffman_dict;
use crate::encode::huffman_encode_span;
use crate::error::{CodecError, Result};
use crate::histogram::histogram;
use crate::reverse::huffman_build_reverse_dict;
use crate::size::{bits_to_bytes, calculate_compressed_size_in_bits};
use crate::tree::huffman_tree;
use crate::{HUFFMAN_HEADER_SIZE, MAX_CODE_LEN, NUM_SYMBOLS};

/// In-memory encode/decode of the container format, without any file I/O.
/// [`huffman_encode_file`] and [`huffman_decode_file`] are thin wrappers
/// around this that add reading and writing the bytes to disk.
///
/// Carries the [`CodecConfig`] used for histogramming and encoding (decode
/// rebuilds the histogram from the container header, so it needs no
/// config of its own).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCodec {
    config: CodecConfig,
}

impl FileCodec {
    /// Builds a codec that partitions work according to `config` instead
    /// of [`CodecConfig::default`].
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Encodes `data` into the container format: header followed by packed
    /// bitstream.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let hist = histogram(data);
        let dict = canonicalize_huffman_dict(&huffman_dict(&huffman_tree(&hist)));
        let bits = calculate_compressed_size_in_bits(&hist, &dict);
        let payload_bytes = bits_to_bytes(bits) as usize;

        let mut out = vec![0u8; HUFFMAN_HEADER_SIZE + payload_bytes];
        LittleEndian::write_u64(&mut out[0..8], data.len() as u64);
        for (i, &count) in hist.iter().enumerate() {
            let offset = 8 + i * 8;
            LittleEndian::write_u64(&mut out[offset..offset + 8], count);
        }

        huffman_encode_span(data, &mut out[HUFFMAN_HEADER_SIZE..], &dict)?;
        log::debug!(
            "FileCodec::encode: {} bytes -> {} bytes ({} threads)",
            data.len(),
            out.len(),
            self.config.threads
        );
        Ok(out)
    }

    /// Decodes a container produced by [`FileCodec::encode`] back into the
    /// original bytes.
    pub fn decode(&self, container: &[u8]) -> Result<Vec<u8>> {
        if container.len() < HUFFMAN_HEADER_SIZE {
            return Err(CodecError::Format(format!(
                "container shorter than header: {} bytes, need at least {HUFFMAN_HEADER_SIZE}",
                container.len()
            )));
        }

        let payload_len = LittleEndian::read_u64(&container[0..8]) as usize;

        let mut hist = [0u64; NUM_SYMBOLS];
        for (i, slot) in hist.iter_mut().enumerate() {
            let offset = 8 + i * 8;
            *slot = LittleEndian::read_u64(&container[offset..offset + 8]);
        }

        let dict = canonicalize_huffman_dict(&huffman_dict(&huffman_tree(&hist)));
        let total_bits = calculate_compressed_size_in_bits(&hist, &dict);
        let expected_bytes = bits_to_bytes(total_bits) as usize;
        let available_bytes = container.len() - HUFFMAN_HEADER_SIZE;
        if available_bytes < expected_bytes {
            return Err(CodecError::Format(format!(
                "bitstream shorter than histogram implies: have {available_bytes} bytes, need {expected_bytes}"
            )));
        }

        let reverse = huffman_build_reverse_dict(&dict, MAX_CODE_LEN)?;
        let mut out = vec![0u8; payload_len];
        let decoded = huffman_decode_span(
            &container[HUFFMAN_HEADER_SIZE..],
            total_bits,
            &mut out,
            &dict,
            &reverse,
        )?;

        if decoded != payload_len {
            return Err(CodecError::Format(format!(
                "decoded {decoded} symbols, header declares payload length {payload_len}"
            )));
        }
        Ok(out)
    }
}

/// Reads `input_path`, encodes it into the container format, and writes the
/// result to `output_path`. Returns the size in bytes of the encoded file.
pub fn huffman_encode_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: CodecConfig,
) -> Result<u64> {
    let data = fs::read(input_path.as_ref())?;
    log::info!(
        "encoding {} ({} bytes) -> {}",
        input_path.as_ref().display(),
        data.len(),
        output_path.as_ref().display()
    );
    let container = FileCodec::with_config(config).encode(&data)?;
    let output_size = container.len() as u64;
    let mut file = fs::File::create(output_path.as_ref())?;
    file.write_all(&container)?;
    Ok(output_size)
}

/// Reads a container from `input_path`, decodes it, and writes the
/// original bytes to `output_path`.
pub fn huffman_decode_file(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let container = fs::read(input_path.as_ref())?;
    let data = FileCodec::default().decode(&container)?;
    log::info!(
        "decoded {} -> {} ({} bytes)",
        input_path.as_ref().display(),
        output_path.as_ref().display(),
        data.len()
    );
    let mut file = fs::File::create(output_path.as_ref())?;
    file.write_all(&data)?;
    Ok(())
}
