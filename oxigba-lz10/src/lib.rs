//! # OxiGba LZ10
//!
//! Pure Rust implementation of the GBA LZ77 "type 0x10" compression format
//! used by Game Boy Advance graphics and data tooling.
//!
//! The stream starts with a 4-byte header (`0x10` plus the 24-bit
//! little-endian uncompressed length), followed by blocks of one flags byte
//! and up to 8 tokens. A set flag bit marks a 2-byte back-reference (3-18
//! bytes copied from up to 4096 bytes back); a clear bit marks a literal
//! byte. The stream is zero-padded to a multiple of 4 bytes so the BIOS
//! decompressor can copy words.
//!
//! ## Example
//!
//! ```rust
//! use oxigba_lz10::compress;
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(data).unwrap();
//!
//! assert_eq!(compressed[0], 0x10);
//! assert_eq!(compressed.len() % 4, 0);
//! ```
//!
//! ## Custom window
//!
//! The window and read-ahead default to the format maximums (4096 and 18)
//! and can be narrowed for decoders with smaller history buffers:
//!
//! ```rust
//! use oxigba_lz10::{Lz10Config, compress_with_config};
//!
//! let config = Lz10Config::new(256, 18).unwrap();
//! let compressed = compress_with_config(b"some data", config).unwrap();
//! # assert_eq!(compressed[0], 0x10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod encode;
pub mod error;

// Re-exports
pub use config::{
    Lz10Config, MAX_INPUT_LEN, MAX_READ_AHEAD, MAX_WINDOW_SIZE, MIN_MATCH_DISTANCE, MIN_MATCH_LEN,
};
pub use encode::{
    LZ10_TYPE_BYTE, Lz10Encoder, compress, compress_with_config, worst_case_compressed_size,
};
pub use error::{Lz10Error, Result};
