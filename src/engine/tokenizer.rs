//! Chunking and shape scanning.
//!
//! A report is a sequence of whitespace-delimited chunks. This module splits
//! the raw text, drops the end-of-message marker (`=`), and scans each chunk
//! once into a [`ChunkShape`] so rule tables can skip rules cheaply.
//!
//! The scan is a heuristic gate only: a rule whose shape requirement is met
//! still has to match its full pattern.

use super::rule_table::ChunkShape;

/// Split `raw` into chunks.
///
/// Runs of whitespace separate chunks. A trailing `=` is dropped whether it
/// is attached to the last chunk (`Q1013=`) or stands alone. Empty input
/// yields no chunks.
pub fn tokenize(raw: &str) -> Vec<&str> {
    let mut chunks: Vec<&str> = raw.split_whitespace().collect();
    if let Some(last) = chunks.pop() {
        let last = last.strip_suffix('=').unwrap_or(last);
        if !last.is_empty() {
            chunks.push(last);
        }
    }
    chunks
}

/// One chunk with its precomputed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub text: &'a str,
    pub shape: ChunkShape,
}

impl<'a> Chunk<'a> {
    pub fn new(text: &'a str) -> Self {
        Chunk { text, shape: ChunkShape::scan(text) }
    }
}

/// Tokenize and shape-scan `raw`.
pub fn scan_chunks(raw: &str) -> Vec<Chunk<'_>> {
    tokenize(raw).into_iter().map(Chunk::new).collect()
}

impl ChunkShape {
    /// Compute the shape bits of a single chunk.
    pub fn scan(text: &str) -> Self {
        let mut shape = ChunkShape::empty();
        let bytes = text.as_bytes();

        if bytes.iter().any(|b| b.is_ascii_digit()) {
            shape |= ChunkShape::HAS_DIGITS;
        }
        if bytes.iter().any(|b| b.is_ascii_alphabetic()) {
            shape |= ChunkShape::HAS_LETTERS;
        }
        if bytes.contains(&b'/') {
            shape |= ChunkShape::HAS_SLASH;
        }
        if !bytes.is_empty() && bytes.iter().all(|b| b.is_ascii_digit()) {
            shape |= ChunkShape::ALL_DIGITS;
        }
        if !bytes.is_empty() && bytes.iter().all(|b| *b == b'/') {
            shape |= ChunkShape::ALL_SLASHES;
        }

        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(tokenize("PAIL  061610Z\t24006KT\n"), vec!["PAIL", "061610Z", "24006KT"]);
    }

    #[test]
    fn drops_attached_terminator() {
        assert_eq!(tokenize("EGLL 061620Z Q1013="), vec!["EGLL", "061620Z", "Q1013"]);
    }

    #[test]
    fn drops_standalone_terminator() {
        assert_eq!(tokenize("EGLL 061620Z Q1013 ="), vec!["EGLL", "061620Z", "Q1013"]);
    }

    #[test]
    fn keeps_inner_equals_signs() {
        assert_eq!(tokenize("A=B C"), vec!["A=B", "C"]);
    }

    #[test]
    fn empty_input_has_no_chunks() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("=").is_empty());
    }

    #[test]
    fn shape_scan() {
        assert_eq!(ChunkShape::scan("9999"), ChunkShape::HAS_DIGITS | ChunkShape::ALL_DIGITS);
        assert_eq!(ChunkShape::scan("////"), ChunkShape::HAS_SLASH | ChunkShape::ALL_SLASHES);
        assert_eq!(
            ChunkShape::scan("M17/M20"),
            ChunkShape::HAS_DIGITS | ChunkShape::HAS_LETTERS | ChunkShape::HAS_SLASH
        );
        assert_eq!(ChunkShape::scan("-SN"), ChunkShape::HAS_LETTERS);
        assert!(ChunkShape::scan("").is_empty());
    }
}
