//! LZ10 encoder configuration.
//!
//! The GBA BIOS decompressor fixes the token layout: a reference packs
//! `length - 3` into 4 bits and `distance - 1` into 12 bits. The window and
//! read-ahead are therefore bounded by those field widths, and every
//! configuration is validated against them at construction.

use crate::error::{Lz10Error, Result};

/// Maximum sliding window size (12-bit `distance - 1` field).
pub const MAX_WINDOW_SIZE: usize = 4096;

/// Maximum match length per reference token (4-bit `length - 3` field).
pub const MAX_READ_AHEAD: usize = 18;

/// Shortest match worth a 2-byte reference token.
pub const MIN_MATCH_LEN: usize = 3;

/// Smallest back-reference distance the encoder searches.
pub const MIN_MATCH_DISTANCE: usize = 2;

/// Maximum input length (24-bit header length field).
pub const MAX_INPUT_LEN: usize = 0x00FF_FFFF;

/// LZ10 configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz10Config {
    /// Sliding window size in bytes (2-4096).
    pub window_size: usize,
    /// Maximum match length per token (3-18).
    pub read_ahead: usize,
}

impl Default for Lz10Config {
    fn default() -> Self {
        Self {
            window_size: MAX_WINDOW_SIZE,
            read_ahead: MAX_READ_AHEAD,
        }
    }
}

impl Lz10Config {
    /// Create a validated configuration.
    ///
    /// `window_size` must fit the 12-bit distance field and reach at least
    /// the minimum searched distance; `read_ahead` must fit the 4-bit length
    /// field and reach at least the minimum encodable match.
    pub fn new(window_size: usize, read_ahead: usize) -> Result<Self> {
        if !(MIN_MATCH_DISTANCE..=MAX_WINDOW_SIZE).contains(&window_size) {
            return Err(Lz10Error::InvalidWindowSize { window_size });
        }
        if !(MIN_MATCH_LEN..=MAX_READ_AHEAD).contains(&read_ahead) {
            return Err(Lz10Error::InvalidReadAhead { read_ahead });
        }
        Ok(Self {
            window_size,
            read_ahead,
        })
    }
}
