use crate::cli_err::{CliError, Result};
use crate::pattern::is_sequence_symbol;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a FASTA-like resource into one flat reference sequence.
///
/// Header lines (starting with `>`) are discarded; the remaining lines
/// are trimmed, upper-cased and concatenated in file order. The whole
/// sequence is materialized before any search runs, so multi-record
/// files collapse into a single reference.
pub fn read_fasta(fname: &Path) -> Result<Vec<u8>> {
    let file = File::open(fname)?;
    read_fasta_from(BufReader::new(file))
}

pub fn read_fasta_from<R: BufRead>(reader: R) -> Result<Vec<u8>> {
    let mut seq: Vec<u8> = Vec::new();
    let mut started = false;
    for linerd in reader.lines() {
        let line = linerd?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            started = true;
            continue;
        }
        if !started {
            return Err(CliError::BadFileFormat("fasta file needs to start with >"));
        }
        for c in line.bytes() {
            let c = c.to_ascii_uppercase();
            if !is_sequence_symbol(c) {
                return Err(CliError::BadFileFormat(
                    "sequence line contains a symbol outside A, C, G, T, U, N",
                ));
            }
            seq.push(c);
        }
    }
    if seq.is_empty() {
        return Err(CliError::BadFileFormat("fasta file contains no sequence data"));
    }
    Ok(seq)
}
