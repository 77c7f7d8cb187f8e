//! Error types returned by this crate's public entry points.
use thiserror::Error;

/// Errors that may occur while histogramming, building a tree, encoding, or
/// decoding a span, or reading/writing a container file.
///
/// Every fallible public entry point surfaces one of these variants; no
/// error is swallowed internally. Empty input is not an error: it produces
/// a valid empty encoding. A degenerate single-symbol input is not an error
/// either.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A caller-supplied argument was invalid: a mismatched buffer length, an
    /// output buffer too small to hold the encoded or decoded result, or an
    /// empty histogram passed where a non-empty one was required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A file could not be opened, read, or written.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The container header was malformed, or `total_bits` exceeds what the
    /// provided bitstream can hold.
    #[error("malformed container: {0}")]
    Format(String),

    /// A derived code length exceeded [`crate::MAX_CODE_LEN`].
    ///
    /// Length-limiting in [`crate::dict`] is supposed to prevent this from
    /// ever being reachable; this variant exists so a bug in that pass fails
    /// loudly instead of silently corrupting the reverse dictionary.
    #[error("code length overflow for symbol {symbol}: {len} bits exceeds MAX_CODE_LEN")]
    CodeLengthOverflow { symbol: u8, len: u32 },
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, CodecError>;
