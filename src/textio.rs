//! Text file reading, treated as an external collaborator per
//! `SPEC_FULL.md` §1/§6: trailing whitespace on each line is trimmed and
//! lines are concatenated with no separator. Grounded on
//! `original_source/bwtzip.py`'s `read_file`.

use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads `path` line by line, trimming trailing whitespace from each line
/// and concatenating with no separator between lines.
pub fn read_text_file(path: impl AsRef<Path>) -> std::io::Result<Vec<u8>> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(line?.trim_end());
    }
    Ok(text.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_whitespace_and_joins_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "abc   \ndef\t\nghi\n").unwrap();
        let text = read_text_file(&path).unwrap();
        assert_eq!(text, b"abcdefghi");
    }
}
