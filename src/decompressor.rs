//! Parses the header, rebuilds the Huffman trie, decodes the run-length
//! payload, and inverts the BWT, per `SPEC_FULL.md` §4.7.
//!
//! State machine: Header -> Payload -> Done. Any decode error is terminal
//! (§7's policy: nothing is retried).

use crate::alphabet;
use crate::bits::BitReader;
use crate::bwt;
use crate::elias;
use crate::huffman::HuffmanDecoder;
use crate::Error;

/// Decompresses a packed bitstream produced by [`crate::compressor::compress`]
/// back into the original text.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    let reader = BitReader::new(bytes);
    let mut pos = 0;

    let (n, next) = elias::decode(&reader, pos)?;
    pos = next;
    let (u, next) = elias::decode(&reader, pos)?;
    pos = next;
    log::debug!("decompress: n={n}, {u} distinct symbols");

    let mut decoder = HuffmanDecoder::new();
    for _ in 0..u {
        let (ascii, next) = reader.read(pos, 7)?;
        pos = next;
        let symbol = ascii as u8;
        if symbol < alphabet::SENTINEL || symbol > alphabet::MAX_SYMBOL {
            return Err(Error::DecodeStructural("header symbol outside the admitted alphabet"));
        }
        let (code_len, next) = elias::decode(&reader, pos)?;
        pos = next;
        let mut code = Vec::with_capacity(code_len as usize);
        for _ in 0..code_len {
            code.push(reader.bit_at(pos)?);
            pos += 1;
        }
        decoder.insert(symbol, &code)?;
    }

    let mut bwt_string = Vec::with_capacity(n as usize);
    while (bwt_string.len() as u32) < n {
        let (symbol, next) = decoder.decode_one(&reader, pos)?;
        pos = next;
        let (count, next) = elias::decode(&reader, pos)?;
        pos = next;
        bwt_string.extend(std::iter::repeat(symbol).take(count as usize));
    }
    if bwt_string.len() as u32 != n {
        return Err(Error::DecodeStructural("run-length payload decoded to the wrong symbol count"));
    }
    log::debug!("decompress: reassembled {} BWT symbols", bwt_string.len());

    let text = bwt::invert(&bwt_string)?;
    log::debug!("decompress: recovered {} bytes of text", text.len());
    Ok(text)
}
