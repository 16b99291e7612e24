use crate::cli_err::{CliError, Result};
use std::cmp::min;

/// One worker's share of the reference sequence.
///
/// The interior `[start, interior_end)` is the range of match positions
/// the worker owns; interiors of consecutive chunks tile the reference
/// with no gaps and no overlap. The slice `[start, slice_end)` is what
/// the worker actually scans: it runs `pattern_len - 1` symbols past the
/// interior (clamped to the sequence end) so a match straddling the
/// interior boundary is still seen whole by the owning worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    pub start: usize,
    pub interior_end: usize,
    pub slice_end: usize,
}

impl ChunkSpec {
    pub fn interior_len(&self) -> usize {
        self.interior_end - self.start
    }

    pub fn slice_len(&self) -> usize {
        self.slice_end - self.start
    }
}

/// Splits `seq_len` symbols into `workers` contiguous chunks. The
/// remainder of the division is spread one symbol at a time over the
/// leading chunks. Degenerate sizings are rejected here, before any
/// worker exists.
pub fn plan_chunks(seq_len: usize, pattern_len: usize, workers: usize) -> Result<Vec<ChunkSpec>> {
    if pattern_len == 0 {
        return Err(CliError::ArgumentError("pattern must not be empty"));
    }
    if pattern_len > seq_len {
        return Err(CliError::ArgumentError(
            "pattern is longer than the reference sequence",
        ));
    }
    if workers == 0 {
        return Err(CliError::ArgumentError("worker count must be at least 1"));
    }
    if workers > seq_len {
        return Err(CliError::ArgumentError(
            "worker count exceeds the reference sequence length",
        ));
    }
    let base = seq_len / workers;
    let extra = seq_len % workers;
    let overlap = pattern_len - 1;
    let mut chunks: Vec<ChunkSpec> = Vec::with_capacity(workers);
    let mut start = 0;
    for k in 0..workers {
        let interior_end = start + base + usize::from(k < extra);
        chunks.push(ChunkSpec {
            start,
            interior_end,
            slice_end: min(interior_end + overlap, seq_len),
        });
        start = interior_end;
    }
    Ok(chunks)
}
