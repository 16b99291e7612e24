mod cli_utils;

use crate::cli_utils::{build_run_info, Cli};
use anyhow::Result;
use clap::Parser;
use patscan_lib::search;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let run_info = build_run_info(&cli)?;

    if let Some(required) = run_info.required {
        eprintln!(
            "Requiring at least {} of {} positions to agree",
            required,
            run_info.pattern.len()
        );
    }

    let start_time = Instant::now();
    let mut positions = search(
        &run_info.sequence,
        &run_info.pattern,
        run_info.kind,
        run_info.workers,
    )?;
    let tot_time = start_time.elapsed();
    positions.sort_unstable();

    let out_writer = if run_info.out_path != "-" {
        Box::new(File::create(&run_info.out_path)?) as Box<dyn Write>
    } else {
        Box::new(std::io::stdout()) as Box<dyn Write>
    };
    let mut out_buf_writer = BufWriter::new(out_writer);
    for pos in &positions {
        writeln!(out_buf_writer, "{}", pos)?;
    }
    out_buf_writer.flush()?;

    eprintln!(
        "Found {} matches in {}s",
        positions.len(),
        tot_time.as_secs_f64()
    );
    Ok(())
}
