//! # bwt-zip
//!
//! A lossless text compressor/decompressor built on a Burrows-Wheeler
//! Transform, run-length encoding, an Elias gamma-delta hybrid integer code,
//! and a per-message Huffman code, all packed into a single self-describing
//! bitstream.
//!
//! * `compressor` drives header emission, BWT + RLE of the payload, and
//!   bitstream flushing.
//! * `decompressor` parses the header, rebuilds the Huffman trie, decodes the
//!   run-length payload, and inverts the BWT.
//!
//! Both halves operate on in-memory buffers; there is no streaming mode.
//! The alphabet is fixed to printable ASCII `0x24..=0x7E`, with `$` (0x24)
//! reserved as the BWT sentinel.
//!
//! ## Buffer Example
//!
//! ```rs
//! use bwtzip::{compressor, decompressor};
//! let text = "the quick brown fox".as_bytes();
//! let compressed = compressor::compress(text).expect("compression failed");
//! let recovered = decompressor::decompress(&compressed).expect("decompression failed");
//! assert_eq!(text.to_vec(), recovered);
//! ```

pub mod alphabet;
pub mod bits;
pub mod elias;
pub mod suffix_array;
pub mod bwt;
pub mod huffman;
pub mod rle;
pub mod compressor;
pub mod decompressor;
pub mod textio;

/// Crate-wide error taxonomy, covering both I/O and the codec's own invariants.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("byte {byte:#04x} at position {pos} is outside the printable ASCII window 0x24..=0x7E")]
    InputDomain { byte: u8, pos: usize },
    #[error("reserved sentinel '$' found in user input at position {0}")]
    SentinelInInput(usize),
    #[error("bitstream ended while decoding {0}")]
    DecodeTruncated(&'static str),
    #[error("corrupt stream: {0}")]
    DecodeStructural(&'static str),
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
