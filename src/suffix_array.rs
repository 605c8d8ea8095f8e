//! Naive suffix array construction.
//!
//! Produces a 1-indexed permutation of a text's suffix starting positions in
//! lexicographic order, per `SPEC_FULL.md` §4.3. `O(n^2 log n)` is
//! acceptable at the budgeted input sizes; comparisons are done against
//! slices of the original buffer rather than materialized suffix strings, to
//! avoid the `O(n^2)` space a naive implementation gets if it allocates a
//! new string per suffix (see `original_source/bwtzip.py`'s
//! `SuffixArray.naive_suffix_array`, which does allocate one string per
//! suffix; we keep its 1-indexing convention but compare by slice).

/// Builds the suffix array of `text`. Returns `SA` such that `SA[k] - 1` is
/// the 0-indexed starting position of the `k`-th smallest suffix.
///
/// `text` is expected to already include the trailing sentinel, and the
/// sentinel must compare less than every other byte in `text` (true for the
/// fixed alphabet in `SPEC_FULL.md` §3, where `$` is the lowest-valued byte).
pub fn build(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    indices.into_iter().map(|i| i + 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banana_dollar() {
        let sa = build(b"banana$");
        // Suffixes (0-indexed pos): $ < a$ < ana$ < anana$ < banana$ < na$ < nana$
        let expected_0indexed = [6, 5, 3, 1, 0, 4, 2];
        let got: Vec<usize> = sa.iter().map(|x| x - 1).collect();
        assert_eq!(got, expected_0indexed);
    }

    #[test]
    fn single_char() {
        let sa = build(b"a$");
        assert_eq!(sa, vec![2, 1]);
    }

    #[test]
    fn is_a_permutation_of_1_to_n() {
        let text = b"mississippi$";
        let mut sa = build(text);
        sa.sort();
        assert_eq!(sa, (1..=text.len()).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_order_is_lexicographic() {
        let text = b"mississippi$";
        let sa = build(text);
        for w in sa.windows(2) {
            let a = &text[w[0] - 1..];
            let b = &text[w[1] - 1..];
            assert!(a <= b);
        }
    }
}
