//! Runtime configuration for the parallel histogram and encoder variants.

/// Configuration threaded through the parallel entry points instead of
/// being read from hidden global state.
#[derive(Debug, Clone, Copy)]
pub struct CodecConfig {
    /// Number of worker threads to partition work across. Sequential
    /// operations ignore this field entirely.
    pub threads: usize,
}

impl CodecConfig {
    /// Builds a config with an explicit thread count. `threads` is clamped
    /// to at least 1.
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { threads }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_at_least_one_thread() {
        assert!(CodecConfig::default().threads >= 1);
    }

    #[test]
    fn with_threads_clamps_to_one() {
        assert_eq!(CodecConfig::with_threads(0).threads, 1);
    }
}
