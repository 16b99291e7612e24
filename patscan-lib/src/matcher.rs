use crate::shift_table::ShiftTable;
use std::cmp::max;

/// Strategy selector handed to each search worker.
///
/// All three strategies share one contract: scan a chunk slice for
/// windows matching the pattern and return the 0-indexed window starts,
/// local to the slice. Every candidate start up to and including
/// `chunk_len - pattern_len` is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    BruteForce,
    SkipSearch,
    /// Approximate matching: a window counts when at least `required`
    /// positions agree with the pattern.
    Hamming { required: usize },
}

/// Runs the selected matcher over one chunk slice. Matcher-local state
/// (the skip table) is built here so every worker constructs its own
/// from the shared read-only pattern.
pub fn scan_chunk(chunk: &[u8], pattern: &[u8], kind: MatcherKind) -> Vec<usize> {
    match kind {
        MatcherKind::BruteForce => brute_force_scan(chunk, pattern),
        MatcherKind::SkipSearch => {
            let table = ShiftTable::build(pattern);
            skip_search_scan(chunk, pattern, &table)
        }
        MatcherKind::Hamming { required } => hamming_scan(chunk, pattern, required),
    }
}

/// Compares every candidate window left to right, bailing out at the
/// first mismatching position.
pub fn brute_force_scan(chunk: &[u8], pattern: &[u8]) -> Vec<usize> {
    let mut matches: Vec<usize> = Vec::new();
    if pattern.is_empty() || chunk.len() < pattern.len() {
        return matches;
    }
    for i in 0..=(chunk.len() - pattern.len()) {
        if &chunk[i..i + pattern.len()] == pattern {
            matches.push(i);
        }
    }
    matches
}

/// Bad-character search: compares each window right to left and on a
/// mismatch shifts by the mismatching symbol's table distance, less the
/// offset already matched.
pub fn skip_search_scan(chunk: &[u8], pattern: &[u8], table: &ShiftTable) -> Vec<usize> {
    let mut matches: Vec<usize> = Vec::new();
    let longp = pattern.len();
    if longp == 0 || chunk.len() < longp {
        return matches;
    }
    // window start in the chunk
    let mut i = 0;
    // 1-based offset of the symbol under comparison, from the pattern's
    // right end
    let mut a = 1;
    while i + longp <= chunk.len() {
        let pos = longp - a;
        let c = chunk[i + pos];
        if c != pattern[pos] {
            i += max(1, table.shift(c).saturating_sub(a));
            a = 1;
        } else if a == longp {
            matches.push(i);
            i += 1;
            a = 1;
        } else {
            a += 1;
        }
    }
    matches
}

/// Counts agreeing positions over the whole window, with no early exit,
/// and reports windows meeting the threshold. `required` is usually
/// derived with [`crate::similarity_threshold`].
pub fn hamming_scan(chunk: &[u8], pattern: &[u8], required: usize) -> Vec<usize> {
    let mut matches: Vec<usize> = Vec::new();
    let longp = pattern.len();
    if longp == 0 || chunk.len() < longp {
        return matches;
    }
    for i in 0..=(chunk.len() - longp) {
        let agreements = chunk[i..i + longp]
            .iter()
            .zip(pattern.iter())
            .filter(|(x, y)| x == y)
            .count();
        if agreements >= required {
            matches.push(i);
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_repeated_motif() {
        assert_eq!(brute_force_scan(b"ACGTACGTACGT", b"ACGT"), vec![0, 4, 8]);
    }

    #[test]
    fn test_brute_force_includes_last_legal_start() {
        // match flush against the end of the chunk
        assert_eq!(brute_force_scan(b"TTTACG", b"ACG"), vec![3]);
    }

    #[test]
    fn test_brute_force_no_match() {
        assert!(brute_force_scan(b"ACGTACGT", b"TTT").is_empty());
    }

    #[test]
    fn test_brute_force_pattern_longer_than_chunk() {
        assert!(brute_force_scan(b"AC", b"ACGT").is_empty());
    }

    #[test]
    fn test_skip_search_repeated_motif() {
        let pattern = b"ACGT";
        let table = ShiftTable::build(pattern);
        assert_eq!(
            skip_search_scan(b"ACGTACGTACGT", pattern, &table),
            vec![0, 4, 8]
        );
    }

    #[test]
    fn test_skip_search_includes_last_legal_start() {
        let pattern = b"ACG";
        let table = ShiftTable::build(pattern);
        assert_eq!(skip_search_scan(b"TTTACG", pattern, &table), vec![3]);
    }

    #[test]
    fn test_skip_search_overlapping_matches() {
        let pattern = b"AAA";
        let table = ShiftTable::build(pattern);
        assert_eq!(skip_search_scan(b"AAAAA", pattern, &table), vec![0, 1, 2]);
    }

    #[test]
    fn test_skip_search_agrees_with_brute_force() {
        let chunk = b"GATTACAGATTACATTTGATCCAGGAGATTACA";
        for pattern in [&b"GATTACA"[..], &b"TTT"[..], &b"GA"[..], &b"CAT"[..], &b"CCC"[..]] {
            let table = ShiftTable::build(pattern);
            assert_eq!(
                skip_search_scan(chunk, pattern, &table),
                brute_force_scan(chunk, pattern),
                "pattern {:?}",
                std::str::from_utf8(pattern).unwrap()
            );
        }
    }

    #[test]
    fn test_skip_search_shifts_past_absent_symbol() {
        let pattern = b"ACAC";
        let table = ShiftTable::build(pattern);
        // T never occurs in the pattern, so windows containing it are
        // skipped wholesale without being re-probed
        assert_eq!(skip_search_scan(b"TTTTACACTT", pattern, &table), vec![4]);
    }

    #[test]
    fn test_ambiguous_reference_symbol_never_matches() {
        // N in the reference mismatches every pattern symbol; the skip
        // table still knows how far to shift past it
        let pattern = b"ACG";
        let table = ShiftTable::build(pattern);
        assert_eq!(brute_force_scan(b"ACNACGACG", pattern), vec![3, 6]);
        assert_eq!(skip_search_scan(b"ACNACGACG", pattern, &table), vec![3, 6]);
    }

    #[test]
    fn test_hamming_counts_ambiguous_as_disagreement() {
        assert!(hamming_scan(b"AANAA", b"AAA", 3).is_empty());
        assert_eq!(hamming_scan(b"AANAA", b"AAA", 2), vec![0, 1, 2]);
    }

    #[test]
    fn test_hamming_exact_threshold_all_positions() {
        // every window of an all-A reference matches an all-A pattern
        assert_eq!(
            hamming_scan(b"AAAAAAAAAA", b"AAA", 3),
            vec![0, 1, 2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn test_hamming_tolerates_disagreements() {
        // one substitution inside the motif still clears 3-of-4
        assert_eq!(hamming_scan(b"ACGTTTACTT", b"ACGT", 3), vec![0, 6]);
    }

    #[test]
    fn test_hamming_threshold_not_met() {
        assert!(hamming_scan(b"GGGGGGGG", b"AAAA", 2).is_empty());
    }

    #[test]
    fn test_hamming_includes_last_legal_start() {
        assert_eq!(hamming_scan(b"GGGGACG", b"ACG", 3), vec![4]);
    }

    #[test]
    fn test_scan_chunk_dispatches_all_kinds() {
        let chunk = b"ACGTACGT";
        let pattern = b"ACGT";
        assert_eq!(scan_chunk(chunk, pattern, MatcherKind::BruteForce), vec![0, 4]);
        assert_eq!(scan_chunk(chunk, pattern, MatcherKind::SkipSearch), vec![0, 4]);
        assert_eq!(
            scan_chunk(chunk, pattern, MatcherKind::Hamming { required: 4 }),
            vec![0, 4]
        );
    }
}
