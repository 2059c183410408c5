//! LZ10-specific error types.

use thiserror::Error;

/// GBA LZ10 compression errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Lz10Error {
    /// Input buffer is empty; the format cannot represent zero bytes.
    #[error("Input is empty")]
    EmptyInput,

    /// Input length does not fit the header's 24-bit length field.
    #[error("Input too large: {len} bytes exceeds the 24-bit limit of {max}")]
    InputTooLarge {
        /// Length of the rejected input.
        len: usize,
        /// Maximum representable length.
        max: usize,
    },

    /// Window size outside the range the 12-bit distance field supports.
    #[error("Invalid window size: {window_size} (must be 2-4096)")]
    InvalidWindowSize {
        /// The rejected window size.
        window_size: usize,
    },

    /// Read-ahead outside the range the 4-bit length field supports.
    #[error("Invalid read-ahead: {read_ahead} (must be 3-18)")]
    InvalidReadAhead {
        /// The rejected read-ahead.
        read_ahead: usize,
    },
}

/// Result type for LZ10 operations.
pub type Result<T> = std::result::Result<T, Lz10Error>;
