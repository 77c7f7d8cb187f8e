//! Bit-level encoding of a byte span against a [`Dict`].
//!
//! Three variants are provided and MUST produce byte-identical output for
//! the same `(src, dict)` pair: [`huffman_encode_span`] (sequential),
//! [`huffman_encode_span_parallel`] (each worker encodes its chunk into a
//! private buffer, then the buffers are stitched together bit-by-bit) and
//! [`huffman_encode_span_parallel_twopass`] (bit offsets are computed up
//! front so every worker can write directly into its final position in the
//! shared output buffer).
use crate::bitio::BitWriter;
use crate::dict::Dict;
use crate::error::{CodecError, Result};

/// Sums the code lengths of every byte in `src`, failing if any byte has no
/// code in `dict` (the caller passed a dictionary that wasn't built from a
/// histogram covering `src`).
fn validate_and_count_bits(src: &[u8], dict: &Dict) -> Result<u64> {
    let mut total = 0u64;
    for &b in src {
        let code = dict[b as usize];
        if code.is_empty() {
            return Err(CodecError::InvalidArgument(format!(
                "no Huffman code for byte {b}: dictionary does not cover this input"
            )));
        }
        total += code.len as u64;
    }
    Ok(total)
}

fn check_capacity(total_bits: u64, dst_len: usize) -> Result<()> {
    if total_bits > dst_len as u64 * 8 {
        return Err(CodecError::InvalidArgument(format!(
            "output buffer too small: need {total_bits} bits, have {}",
            dst_len * 8
        )));
    }
    Ok(())
}

/// Encodes `src` into `dst` sequentially, one symbol at a time. `dst` must
/// already be zero-initialized and at least
/// [`crate::size::bits_to_bytes`]`(`[`crate::size::calculate_compressed_size_in_bits`]`(...))`
/// bytes long. Returns the number of bits written.
pub fn huffman_encode_span(src: &[u8], dst: &mut [u8], dict: &Dict) -> Result<u64> {
    let total_bits = validate_and_count_bits(src, dict)?;
    check_capacity(total_bits, dst.len())?;

    let mut writer = BitWriter::new(dst);
    for &b in src {
        let code = dict[b as usize];
        writer.write(code.bits, code.len);
    }
    Ok(writer.bit_pos() as u64)
}

/// Like [`huffman_encode_span`], but partitions `src` into
/// `config.threads` chunks, encodes each into a private buffer in
/// parallel, then stitches the private buffers together in order. Because
/// each chunk's encoding starts at an arbitrary (non-byte-aligned) bit
/// offset in the final output, stitching re-reads each private buffer
/// through a [`crate::bitio::BitReader`] and rewrites it through the
/// shared [`BitWriter`] rather than doing a raw byte `memcpy`.
#[cfg(feature = "parallel")]
pub fn huffman_encode_span_parallel(
    src: &[u8],
    dst: &mut [u8],
    dict: &Dict,
    config: crate::config::CodecConfig,
) -> Result<u64> {
    use rayon::prelude::*;

    let bounds = crate::histogram::chunk_bounds(src.len(), config.threads);
    log::debug!(
        "huffman_encode_span_parallel: {} bytes across {} chunks",
        src.len(),
        bounds.len()
    );

    let chunks: Vec<(Vec<u8>, u64)> = bounds
        .into_par_iter()
        .map(|(start, end)| -> Result<(Vec<u8>, u64)> {
            let chunk = &src[start..end];
            let bits = validate_and_count_bits(chunk, dict)?;
            let mut buf = vec![0u8; crate::size::bits_to_bytes(bits) as usize];
            let mut writer = BitWriter::new(&mut buf);
            for &b in chunk {
                let code = dict[b as usize];
                writer.write(code.bits, code.len);
            }
            Ok((buf, bits))
        })
        .collect::<Result<Vec<_>>>()?;

    let total_bits: u64 = chunks.iter().map(|(_, bits)| *bits).sum();
    check_capacity(total_bits, dst.len())?;

    let mut writer = BitWriter::new(dst);
    for (buf, bits) in &chunks {
        let mut reader = crate::bitio::BitReader::new(buf, *bits as usize);
        while !reader.done() {
            let remaining = reader.total_bits() - reader.bit_pos();
            let take = remaining.min(32) as u32;
            let value = reader.read(take);
            writer.write(value, take);
        }
    }
    Ok(writer.bit_pos() as u64)
}

#[cfg(not(feature = "parallel"))]
pub fn huffman_encode_span_parallel(
    src: &[u8],
    dst: &mut [u8],
    dict: &Dict,
    _config: crate::config::CodecConfig,
) -> Result<u64> {
    huffman_encode_span(src, dst, dict)
}

/// Like [`huffman_encode_span_parallel`], but computes every chunk's final
/// bit offset up front (pass one) so each worker can write straight into
/// its place in the shared output buffer (pass two), with no stitching
/// step. A worker's first and last partial bytes may be shared with a
/// neighboring chunk (when a chunk's bit range isn't byte-aligned), so
/// every bit set goes through an atomic OR on the shared buffer; bytes
/// strictly between a chunk's first and last byte are never touched by any
/// other chunk, so this is correct even though it doesn't distinguish
/// interior bytes from boundary ones at the call site.
#[cfg(feature = "parallel")]
pub fn huffman_encode_span_parallel_twopass(
    src: &[u8],
    dst: &mut [u8],
    dict: &Dict,
    config: crate::config::CodecConfig,
) -> Result<u64> {
    let bounds = crate::histogram::chunk_bounds(src.len(), config.threads);

    let chunk_bits: Vec<u64> = bounds
        .iter()
        .map(|&(start, end)| validate_and_count_bits(&src[start..end], dict))
        .collect::<Result<_>>()?;

    let mut offsets = Vec::with_capacity(chunk_bits.len());
    let mut running = 0u64;
    for &bits in &chunk_bits {
        offsets.push(running);
        running += bits;
    }
    let total_bits = running;
    check_capacity(total_bits, dst.len())?;

    log::debug!(
        "huffman_encode_span_parallel_twopass: {} bytes across {} chunks, {total_bits} bits total",
        src.len(),
        bounds.len()
    );

    // SAFETY: AtomicU8 has the same layout as u8, and every worker below
    // only ever touches the bytes its own chunk's bit range covers, via
    // fetch_or rather than a plain store, so overlapping boundary bytes
    // between adjacent chunks never race.
    let atomics: &[std::sync::atomic::AtomicU8] =
        unsafe { std::slice::from_raw_parts(dst.as_ptr() as *const std::sync::atomic::AtomicU8, dst.len()) };

    crossbeam::scope(|scope| {
        for (i, &(start, end)) in bounds.iter().enumerate() {
            let chunk = &src[start..end];
            let bit_offset = offsets[i];
            scope.spawn(move |_| {
                write_chunk_atomic(chunk, dict, atomics, bit_offset);
            });
        }
    })
    .map_err(|_| CodecError::InvalidArgument("an encoder worker thread panicked".into()))?;

    Ok(total_bits)
}

#[cfg(feature = "parallel")]
fn write_chunk_atomic(
    chunk: &[u8],
    dict: &Dict,
    atomics: &[std::sync::atomic::AtomicU8],
    bit_offset: u64,
) {
    use std::sync::atomic::Ordering;

    let mut pos = bit_offset;
    for &b in chunk {
        let code = dict[b as usize];
        for i in 0..code.len {
            if (code.bits >> (code.len - 1 - i)) & 1 == 1 {
                let bit_pos = pos + i as u64;
                let byte_idx = (bit_pos / 8) as usize;
                let bit_in_byte = 7 - (bit_pos % 8) as u32;
                atomics[byte_idx].fetch_or(1 << bit_in_byte, Ordering::Relaxed);
            }
        }
        pos += code.len as u64;
    }
}

#[cfg(not(feature = "parallel"))]
pub fn huffman_encode_span_parallel_twopass(
    src: &[u8],
    dst: &mut [u8],
    dict: &Dict,
    _config: crate::config::CodecConfig,
) -> Result<u64> {
    huffman_encode_span(src, dst, dict)
}
