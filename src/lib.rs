//! # PackBits Decompression
//!
//! `packbits` is a safe, pure-Rust decoder for the PackBits run-length encoding.
//! The format comes from Apple's MacPaint and is used for bitmap data in TIFF,
//! PICT and a number of game asset formats.
//!
//! A stream is a sequence of control units. Each starts with a signed control byte:
//!
//! * `0..=127`: copy the next `n + 1` bytes verbatim.
//! * `-127..=-1`: repeat the next byte `1 - n` times.
//! * `-128`: no-op (see [`MarkerPolicy`]).
//!
//! The decoder never reads past the declared input length and never writes
//! past the requested output size. Malformed input produces a shorter output
//! rather than a panic; [`decompress_into`] reports why decoding stopped.
//!
//! ## Example
//!
//! ```rust
//! use packbits::decompress;
//!
//! // Literal run of 3 bytes, then 4 copies of 'z'.
//! let compressed = [0x02, b'a', b'b', b'c', 0xFD, b'z'];
//!
//! let buffer = decompress(&compressed, compressed.len(), 7).expect("Invalid arguments");
//! assert_eq!(buffer, b"abczzzz");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod decompress;
pub mod error;
pub mod options;

pub use decompress::{
    DecodeReport, Decoder, Termination, decompress, decompress_exact, decompress_into,
};
pub use error::DecompressionError;
pub use options::{MARKER_BYTE, MarkerPolicy};
