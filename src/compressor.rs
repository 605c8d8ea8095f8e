//! Orchestrates header emission, BWT + run-length encoding of the payload,
//! and bitstream flushing, per `SPEC_FULL.md` §4.6.
//!
//! Grounded on `td0.rs`'s orchestration style (a handful of straight-line
//! public functions) and `lzw.rs`'s placement of `log::debug!`/`log::trace!`
//! around the major phases of a codec pass.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::bits::BitWriter;
use crate::bwt;
use crate::elias;
use crate::huffman::HuffmanEncoder;
use crate::rle;
use crate::Error;

/// Compresses `text` (printable ASCII, no embedded `$`) into a packed
/// bitstream: `Elias(n) Elias(u) SymTable(u) Payload Padding`.
pub fn compress(text: &[u8]) -> Result<Vec<u8>, Error> {
    alphabet::validate(text)?;

    let mut with_sentinel = Vec::with_capacity(text.len() + 1);
    with_sentinel.extend_from_slice(text);
    with_sentinel.push(alphabet::SENTINEL);
    let n = with_sentinel.len();

    let mut counts_by_symbol = [0u32; ALPHABET_SIZE];
    for &b in &with_sentinel {
        counts_by_symbol[alphabet::index_of(b)] += 1;
    }
    let counts: Vec<(u8, u32)> = (0..ALPHABET_SIZE)
        .filter(|&i| counts_by_symbol[i] > 0)
        .map(|i| (alphabet::symbol_at(i), counts_by_symbol[i]))
        .collect();
    log::debug!("compress: n={n}, {} distinct symbols", counts.len());

    let encoder = HuffmanEncoder::build(&counts)?;

    let mut writer = BitWriter::new();
    elias::encode(&mut writer, n as u32)?;
    elias::encode(&mut writer, encoder.table().len() as u32)?;
    for (symbol, code) in encoder.table() {
        writer.push_bits(*symbol as u32, 7);
        elias::encode(&mut writer, code.len() as u32)?;
        for &bit in code {
            writer.push_bit(bit);
        }
    }

    let bwt_string = bwt::transform(&with_sentinel);
    let runs = rle::split(&bwt_string);
    log::debug!("compress: {} runs over {} BWT symbols", runs.len(), bwt_string.len());
    for (symbol, count) in runs {
        encoder.encode_symbol(&mut writer, symbol)?;
        elias::encode(&mut writer, count)?;
        log::trace!("run: {:?} x{count}", symbol as char);
    }

    let bytes = writer.finish();
    log::debug!("compress: emitted {} bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompressor::decompress;

    #[test]
    fn single_char() {
        let compressed = compress(b"a").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"a");
    }

    #[test]
    fn banana() {
        let compressed = compress(b"banana").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"banana");
    }

    #[test]
    fn aaaa() {
        let compressed = compress(b"aaaa").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"aaaa");
    }

    #[test]
    fn mississippi() {
        let compressed = compress(b"mississippi").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"mississippi");
    }

    #[test]
    fn rejects_sentinel_in_input() {
        assert!(compress(b"has$in it").is_err());
    }

    #[test]
    fn rejects_out_of_alphabet_byte() {
        assert!(compress(&[b'a', 0x7F]).is_err());
    }

    #[test]
    fn all_distinct_symbols() {
        let text: Vec<u8> = (alphabet::SENTINEL + 1..=alphabet::MAX_SYMBOL).collect();
        let compressed = compress(&text).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), text);
    }

    #[test]
    fn requires_final_byte_padding() {
        // lengths chosen so the packed stream doesn't land on a byte boundary
        for len in 1..16 {
            let text: Vec<u8> = (0..len).map(|i| alphabet::SENTINEL + 1 + (i % 50) as u8).collect();
            let compressed = compress(&text).unwrap();
            assert_eq!(decompress(&compressed).unwrap(), text);
        }
    }
}
