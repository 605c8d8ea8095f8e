//! Run-length splitting/joining over the BWT string, per `SPEC_FULL.md` §3
//! ("Runs") and §4.6/§4.7 (payload emission/parsing).
//!
//! The encoder compares adjacent symbols and emits on every transition,
//! firing the final run after the scan — the tail emission is the only path
//! taken for a length-1 BWT string, which is the edge case the spec's Open
//! Questions call out as "easy to break". `other_examples/.../bwtstring.rs.rs`'s
//! `rle_write` demonstrates the same peekable-iterator idiom for collecting
//! runs.

/// Splits `bwt` into maximal runs of identical symbols: `(symbol, count)`
/// pairs where no two adjacent pairs share a symbol and `count >= 1`.
pub fn split(bwt: &[u8]) -> Vec<(u8, u32)> {
    let mut runs = Vec::new();
    let mut iter = bwt.iter();
    let Some(&first) = iter.next() else {
        return runs;
    };
    let mut current = first;
    let mut count: u32 = 1;
    for &b in iter {
        if b == current {
            count += 1;
        } else {
            runs.push((current, count));
            current = b;
            count = 1;
        }
    }
    runs.push((current, count));
    runs
}

/// Inverse of [`split`]: concatenates `symbol * count` for each run.
pub fn join(runs: &[(u8, u32)]) -> Vec<u8> {
    let mut out = Vec::new();
    for &(symbol, count) in runs {
        out.extend(std::iter::repeat(symbol).take(count as usize));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_banana_bwt() {
        // BWT of "banana$" is "annb$aa"
        let runs = split(b"annb$aa");
        assert_eq!(runs, vec![(b'a', 1), (b'n', 2), (b'b', 1), (b'$', 1), (b'a', 2)]);
    }

    #[test]
    fn splits_aaaa_bwt() {
        // BWT of "aaaa$" is "a$aaaa"
        let runs = split(b"a$aaaa");
        assert_eq!(runs, vec![(b'a', 1), (b'$', 1), (b'a', 4)]);
    }

    #[test]
    fn single_character_takes_only_the_tail_path() {
        let runs = split(b"x");
        assert_eq!(runs, vec![(b'x', 1)]);
    }

    #[test]
    fn empty_input_yields_no_runs() {
        assert!(split(b"").is_empty());
    }

    #[test]
    fn split_join_round_trip() {
        let text = b"aaabbbbccaaaad$";
        assert_eq!(join(&split(text)), text);
    }

    #[test]
    fn all_distinct_symbols_yields_one_run_each() {
        let text = b"abcdefg$";
        let runs = split(text);
        assert!(runs.iter().all(|&(_, c)| c == 1));
        assert_eq!(runs.len(), text.len());
    }
}
