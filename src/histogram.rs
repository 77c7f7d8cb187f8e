//! Frequency histogramming over byte spans.
//!
//! Four variants are provided: [`histogram`] (single-threaded scalar pass),
//! [`histogram_parallel`] and [`histogram_parallel_64`] (per-thread private
//! tables reduced at the end, with 32- and 64-bit counters respectively),
//! and [`histogram_fast`] (multiple private tables per thread to reduce
//! store-to-load dependency chains). All four produce identical output for
//! identical input.
use crate::config::CodecConfig;
use crate::NUM_SYMBOLS;

/// Counts occurrences of each of the 256 byte values in `data` with a
/// single sequential pass. An empty span yields all zeros.
pub fn histogram(data: &[u8]) -> [u64; NUM_SYMBOLS] {
    let mut counts = [0u64; NUM_SYMBOLS];
    for &b in data {
        counts[b as usize] += 1;
    }
    counts
}

/// Splits `data` into `parts` roughly equal contiguous chunks. The last
/// chunk absorbs any remainder. Chunking is deterministic for a given
/// `(len, parts)` pair but is not part of the external contract: callers
/// must not rely on the exact boundaries, only on the aggregate count.
pub(crate) fn chunk_bounds(len: usize, parts: usize) -> Vec<(usize, usize)> {
    if parts <= 1 || len == 0 {
        return vec![(0, len)];
    }
    let base = len / parts;
    let rem = len % parts;
    let mut bounds = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let size = base + if i < rem { 1 } else { 0 };
        let end = start + size;
        if start != end {
            bounds.push((start, end));
        }
        start = end;
    }
    if bounds.is_empty() {
        bounds.push((0, len));
    }
    bounds
}

/// Per-thread private 256-entry 32-bit counter table, reduced into a
/// 64-bit total at the end. Each chunk must not exceed `u32::MAX` bytes of
/// any single symbol or the per-thread counter overflows; callers with
/// chunks that could exceed 4 GiB/thread per symbol must use
/// [`histogram_parallel_64`] instead.
#[cfg(feature = "parallel")]
pub fn histogram_parallel(data: &[u8], config: CodecConfig) -> [u64; NUM_SYMBOLS] {
    use rayon::prelude::*;

    let chunks = chunk_bounds(data.len(), config.threads);
    log::debug!(
        "histogram_parallel: {} bytes across {} chunks",
        data.len(),
        chunks.len()
    );

    let partials: Vec<[u32; NUM_SYMBOLS]> = chunks
        .into_par_iter()
        .map(|(start, end)| {
            let mut local = [0u32; NUM_SYMBOLS];
            for &b in &data[start..end] {
                local[b as usize] += 1;
            }
            local
        })
        .collect();

    let mut totals = [0u64; NUM_SYMBOLS];
    for partial in partials {
        for i in 0..NUM_SYMBOLS {
            totals[i] += partial[i] as u64;
        }
    }
    totals
}

/// Identical to [`histogram_parallel`] but with 64-bit per-thread counters,
/// safe for chunks of any size.
#[cfg(feature = "parallel")]
pub fn histogram_parallel_64(data: &[u8], config: CodecConfig) -> [u64; NUM_SYMBOLS] {
    use rayon::prelude::*;

    let chunks = chunk_bounds(data.len(), config.threads);
    log::debug!(
        "histogram_parallel_64: {} bytes across {} chunks",
        data.len(),
        chunks.len()
    );

    let partials: Vec<[u64; NUM_SYMBOLS]> = chunks
        .into_par_iter()
        .map(|(start, end)| {
            let mut local = [0u64; NUM_SYMBOLS];
            for &b in &data[start..end] {
                local[b as usize] += 1;
            }
            local
        })
        .collect();

    let mut totals = [0u64; NUM_SYMBOLS];
    for partial in partials {
        for i in 0..NUM_SYMBOLS {
            totals[i] += partial[i];
        }
    }
    totals
}

/// Number of independent private tables maintained per thread by
/// [`histogram_fast`], indexed by the low bits of the byte's position.
/// Using several independent accumulators per thread breaks the
/// store-to-load dependency chain a single running counter would create.
const FAST_TABLES_PER_THREAD: usize = 4;

/// Like [`histogram_parallel_64`], but each thread maintains
/// [`FAST_TABLES_PER_THREAD`] independent 256-entry tables, selected by the
/// low bits of each byte's position within its chunk, and sums them at the
/// end. This reduces the dependency chain between consecutive increments
/// at the cost of a larger per-thread footprint.
#[cfg(feature = "parallel")]
pub fn histogram_fast(data: &[u8], config: CodecConfig) -> [u64; NUM_SYMBOLS] {
    use rayon::prelude::*;

    let chunks = chunk_bounds(data.len(), config.threads);
    log::debug!(
        "histogram_fast: {} bytes across {} chunks, {} tables/thread",
        data.len(),
        chunks.len(),
        FAST_TABLES_PER_THREAD
    );

    let partials: Vec<[u64; NUM_SYMBOLS]> = chunks
        .into_par_iter()
        .map(|(start, end)| {
            let mut tables = [[0u64; NUM_SYMBOLS]; FAST_TABLES_PER_THREAD];
            for (i, &b) in data[start..end].iter().enumerate() {
                tables[i % FAST_TABLES_PER_THREAD][b as usize] += 1;
            }
            let mut merged = [0u64; NUM_SYMBOLS];
            for table in &tables {
                for i in 0..NUM_SYMBOLS {
                    merged[i] += table[i];
                }
            }
            merged
        })
        .collect();

    let mut totals = [0u64; NUM_SYMBOLS];
    for partial in partials {
        for i in 0..NUM_SYMBOLS {
            totals[i] += partial[i];
        }
    }
    totals
}

#[cfg(not(feature = "parallel"))]
pub fn histogram_parallel(data: &[u8], _config: CodecConfig) -> [u64; NUM_SYMBOLS] {
    histogram(data)
}

#[cfg(not(feature = "parallel"))]
pub fn histogram_parallel_64(data: &[u8], _config: CodecConfig) -> [u64; NUM_SYMBOLS] {
    histogram(data)
}

#[cfg(not(feature = "parallel"))]
pub fn histogram_fast(data: &[u8], _config: CodecConfig) -> [u64; NUM_SYMBOLS] {
    histogram(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_all_zeros() {
        let h = histogram(b"");
        assert_eq!(h.len(), NUM_SYMBOLS);
        assert!(h.iter().all(|&c| c == 0));
    }

    #[test]
    fn sum_equals_input_length() {
        let h = histogram(b"mississippi");
        assert_eq!(h.iter().sum::<u64>(), 11);
        assert_eq!(h[b'm' as usize], 1);
        assert_eq!(h[b'i' as usize], 4);
        assert_eq!(h[b's' as usize], 4);
        assert_eq!(h[b'p' as usize], 2);
    }

    #[test]
    fn aaa_histogram() {
        let h = histogram(b"aaa");
        assert_eq!(h[b'a' as usize], 3);
        assert_eq!(h.iter().sum::<u64>(), 3);
    }

    #[test]
    fn all_variants_agree() {
        let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        let config = CodecConfig::with_threads(4);
        let scalar = histogram(&data);
        assert_eq!(histogram_parallel(&data, config), scalar);
        assert_eq!(histogram_parallel_64(&data, config), scalar);
        assert_eq!(histogram_fast(&data, config), scalar);
    }

    #[test]
    fn chunk_bounds_cover_whole_range_without_overlap() {
        for len in [0usize, 1, 7, 8, 100, 1000] {
            for parts in [1usize, 2, 3, 7, 16] {
                let bounds = chunk_bounds(len, parts);
                let mut expected_start = 0;
                for (start, end) in &bounds {
                    assert_eq!(*start, expected_start);
                    assert!(end >= start);
                    expected_start = *end;
                }
                assert_eq!(expected_start, len);
            }
        }
    }
}
