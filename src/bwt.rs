//! Forward and inverse Burrows-Wheeler Transform, per `SPEC_FULL.md` §4.4.
//!
//! The forward transform reads off the last column of the sorted rotation
//! matrix via the suffix array; the inverse walks the LF-mapping back from
//! the row beginning with the sentinel. Grounded on the rank/first-occurrence
//! approach in `other_examples/.../bwtstring.rs.rs`, adapted to the
//! 1-indexed suffix array this crate's `suffix_array` module produces.

use crate::alphabet::{self, ALPHABET_SIZE, SENTINEL};
use crate::suffix_array;
use crate::Error;

/// Computes `BWT(text)` where `text` already ends in the sentinel `$`.
///
/// `BWT[k] = text[(SA[k] + n - 2) mod n]`, the character immediately
/// preceding the start of the `k`-th smallest rotation.
pub fn transform(text: &[u8]) -> Vec<u8> {
    let n = text.len();
    let sa = suffix_array::build(text);
    log::debug!("bwt transform: n={n}");
    sa.iter()
        .map(|&s| text[(s + n - 2) % n])
        .collect()
}

/// Inverts a BWT string, returning the original text with the sentinel
/// stripped.
///
/// Walks the LF-mapping starting at row 0 (the row whose first column is the
/// sentinel, so its last column is the character preceding the sentinel in
/// the original cyclic text) and fills the output buffer right to left.
/// Rejects any `bwt` that does not contain exactly one sentinel, or whose
/// LF-mapping walk does not terminate on it within `len(bwt)` steps.
pub fn invert(bwt: &[u8]) -> Result<Vec<u8>, Error> {
    let n = bwt.len();
    if n == 0 {
        return Err(Error::DecodeStructural("empty BWT string has no sentinel"));
    }
    let sentinel_count = bwt.iter().filter(|&&b| b == SENTINEL).count();
    if sentinel_count != 1 {
        return Err(Error::DecodeStructural("BWT string does not contain exactly one sentinel"));
    }

    // first_occurrence[c]: index in sorted(bwt) where c first appears.
    let mut counts = [0usize; ALPHABET_SIZE];
    for &b in bwt {
        counts[alphabet::index_of(b)] += 1;
    }
    let mut first_occurrence = [0usize; ALPHABET_SIZE];
    let mut running = 0;
    for i in 0..ALPHABET_SIZE {
        first_occurrence[i] = running;
        running += counts[i];
    }

    // rank[k]: 1-indexed count of bwt[k] within bwt[0..=k].
    let mut seen = [0usize; ALPHABET_SIZE];
    let mut rank = vec![0usize; n];
    for k in 0..n {
        let idx = alphabet::index_of(bwt[k]);
        seen[idx] += 1;
        rank[k] = seen[idx];
    }

    let mut output = vec![0u8; n - 1];
    let mut k = 0usize;
    for i in (0..n - 1).rev() {
        if bwt[k] == SENTINEL {
            return Err(Error::DecodeStructural("inverse BWT reached sentinel early"));
        }
        output[i] = bwt[k];
        let idx = alphabet::index_of(bwt[k]);
        k = first_occurrence[idx] + rank[k] - 1;
        if k >= n {
            return Err(Error::DecodeStructural("inverse BWT LF-mapping index out of range"));
        }
    }
    if bwt[k] != SENTINEL {
        return Err(Error::DecodeStructural("inverse BWT did not terminate on sentinel"));
    }
    log::debug!("bwt invert: recovered {} bytes", output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banana() {
        let bwt = transform(b"banana$");
        assert_eq!(bwt, b"annb$aa");
        assert_eq!(invert(&bwt).unwrap(), b"banana");
    }

    #[test]
    fn single_char() {
        let bwt = transform(b"a$");
        assert_eq!(bwt, b"a$");
        assert_eq!(invert(&bwt).unwrap(), b"a");
    }

    #[test]
    fn repeated_symbol() {
        let bwt = transform(b"aaaa$");
        assert_eq!(bwt, b"a$aaaa");
        assert_eq!(invert(&bwt).unwrap(), b"aaaa");
    }

    #[test]
    fn mississippi() {
        let bwt = transform(b"mississippi$");
        assert_eq!(invert(&bwt).unwrap(), b"mississippi");
    }

    #[test]
    fn rejects_missing_sentinel() {
        assert!(invert(b"abcabc").is_err());
    }

    #[test]
    fn rejects_duplicate_sentinel() {
        assert!(invert(b"a$b$c").is_err());
    }

    #[test]
    fn bijection_over_random_texts() {
        // deterministic pseudo-random walk through the alphabet, no external
        // rng dependency needed for this unit test
        let mut seed: u64 = 0x9E3779B97F4A7C15;
        for _ in 0..50 {
            let mut text = Vec::new();
            let len = 1 + (seed % 200) as usize;
            for _ in 0..len {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                let byte = alphabet::SENTINEL + 1 + ((seed >> 33) % (alphabet::ALPHABET_SIZE as u64 - 1)) as u8;
                text.push(byte);
            }
            let mut with_sentinel = text.clone();
            with_sentinel.push(SENTINEL);
            let bwt = transform(&with_sentinel);
            assert_eq!(invert(&bwt).unwrap(), text);
        }
    }
}
