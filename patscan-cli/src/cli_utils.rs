use clap::{Parser, ValueEnum};
use patscan_lib::*;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "patscan")]
#[command(version)]
#[command(
    about = "Parallel exact and approximate pattern search over nucleotide sequences",
    long_about = None
)]
pub struct Cli {
    /// FASTA file holding the reference sequence
    pub genome: PathBuf,

    /// Pattern to search for (A, C, G, T or U; case-insensitive)
    pub pattern: String,

    /// Matching strategy
    #[arg(short, long, value_enum, default_value_t = Algorithm::Skip)]
    pub algorithm: Algorithm,

    /// Number of parallel search workers
    #[arg(short, long, default_value_t = 1)]
    pub workers: usize,

    /// Output file for match positions, or - for stdout
    #[arg(short, long, default_value = "-")]
    pub output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Position-by-position comparison of every window
    Brute,
    /// Bad-character skip table, compared right to left
    Skip,
    /// Windows agreeing with the pattern in at least 90% of positions
    Hamming,
}

pub struct SearchRunInfo {
    pub sequence: Arc<Vec<u8>>,
    pub pattern: Arc<Vec<u8>>,
    pub kind: MatcherKind,
    pub workers: usize,
    pub out_path: String,
    /// Set for the Hamming strategy: the agreement count being required.
    pub required: Option<usize>,
}

/// Loads and validates everything a search run needs. Bad input aborts
/// with a diagnostic; collecting corrected input is the caller's
/// problem, not the search core's.
pub fn build_run_info(cli: &Cli) -> Result<SearchRunInfo> {
    let sequence = read_fasta(&cli.genome)?;
    let pattern = validate_pattern(&cli.pattern)?;
    let (kind, required) = match cli.algorithm {
        Algorithm::Brute => (MatcherKind::BruteForce, None),
        Algorithm::Skip => (MatcherKind::SkipSearch, None),
        Algorithm::Hamming => {
            let required = similarity_threshold(pattern.len());
            (MatcherKind::Hamming { required }, Some(required))
        }
    };
    Ok(SearchRunInfo {
        sequence: Arc::new(sequence),
        pattern: Arc::new(pattern),
        kind,
        workers: cli.workers,
        out_path: cli.output.clone(),
        required,
    })
}
