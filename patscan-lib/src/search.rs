use crate::cli_err::{CliError, Result};
use crate::matcher::{scan_chunk, MatcherKind};
use crate::partition::plan_chunks;
use log::debug;
use std::sync::Arc;
use std::thread;

/// Runs the selected matcher over the reference with `workers` parallel
/// OS threads and returns the absolute match positions.
///
/// Each worker scans one chunk slice, offsets its local results by the
/// chunk start and publishes every absolute position into a shared
/// append-only channel. The sequence and pattern are immutable snapshots
/// shared through `Arc`; the channel is the only synchronization
/// primitive. The returned positions carry no ordering guarantee;
/// callers wanting a sorted report must sort them.
pub fn search(
    seq: &Arc<Vec<u8>>,
    pattern: &Arc<Vec<u8>>,
    kind: MatcherKind,
    workers: usize,
) -> Result<Vec<usize>> {
    // plan: validates sizing before any thread exists
    let chunks = plan_chunks(seq.len(), pattern.len(), workers)?;
    debug!(
        "dispatching {} workers over {} symbols ({:?})",
        chunks.len(),
        seq.len(),
        kind
    );

    // dispatch: one thread per chunk
    let (sender, receiver) = crossbeam_channel::unbounded::<usize>();
    let mut handles: Vec<thread::JoinHandle<Result<()>>> = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let tseq = Arc::clone(seq);
        let tpattern = Arc::clone(pattern);
        let tsender = sender.clone();
        handles.push(thread::spawn(move || {
            let slice = &tseq[chunk.start..chunk.slice_end];
            // local starts never reach past the interior, so every
            // absolute position lands in exactly one worker's range
            for pos in scan_chunk(slice, &tpattern, kind) {
                tsender.send(chunk.start + pos)?;
            }
            Ok(())
        }));
    }
    drop(sender);

    // collect: join every worker; an abnormal exit surfaces as an error
    // instead of stalling the merge
    join_workers(handles)?;

    // done: all senders are gone, drain whatever the workers published
    Ok(receiver.try_iter().collect())
}

fn join_workers(handles: Vec<thread::JoinHandle<Result<()>>>) -> Result<()> {
    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(Ok(())) => debug!("worker {} completed", worker),
            Ok(Err(err)) => return Err(err),
            Err(_) => return Err(CliError::WorkerFailed { worker }),
        }
    }
    Ok(())
}
