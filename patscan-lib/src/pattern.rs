use crate::cli_err::{CliError, Result};

/// Symbols a reference sequence may contain. N marks an ambiguous
/// nucleotide and never compares equal to a pattern symbol.
pub const SEQUENCE_ALPHABET: &[u8] = b"ACGTUN";

/// Symbols a search pattern may contain (DNA or RNA, no ambiguity codes).
pub const PATTERN_ALPHABET: &[u8] = b"ACGTU";

pub fn cdiv(x: usize, y: usize) -> usize {
    (x + y - 1) / y
}

pub fn is_sequence_symbol(c: u8) -> bool {
    matches!(c, b'A' | b'C' | b'G' | b'T' | b'U' | b'N')
}

pub fn is_pattern_symbol(c: u8) -> bool {
    matches!(c, b'A' | b'C' | b'G' | b'T' | b'U')
}

/// Upper-cases the raw pattern text and checks it against the pattern
/// alphabet. Length against the reference is checked by the partition
/// planner, which knows both sizes.
pub fn validate_pattern(raw: &str) -> Result<Vec<u8>> {
    let pattern: Vec<u8> = raw.trim().bytes().map(|c| c.to_ascii_uppercase()).collect();
    if pattern.is_empty() {
        return Err(CliError::BadPattern("pattern must not be empty"));
    }
    if !pattern.iter().copied().all(is_pattern_symbol) {
        return Err(CliError::BadPattern(
            "pattern may only contain the nucleotides A, C, G, T or U",
        ));
    }
    Ok(pattern)
}

/// Minimum number of agreeing positions for a window to count as a 90%
/// similarity match. Rounds up whenever 90% of the length is not exact.
pub fn similarity_threshold(pattern_len: usize) -> usize {
    cdiv(90 * pattern_len, 100)
}
