use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use levgen_core::mapgen::{densest_level, generate_batch};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for the batch run
    #[arg(short = 'v', long = "seed", default_value_t = 18)]
    seed: u32,

    /// Write a plain-text timing capture of the run to this path
    #[arg(long = "profile-out")]
    profile_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    // Opened before generation so a bad path fails the run up front; this is
    // the only fallible operation in the program.
    let mut capture = match &args.profile_out {
        Some(path) => Some(File::create(path).with_context(|| {
            format!("Failed to create timing capture file: {}", path.display())
        })?),
        None => None,
    };

    println!("Random seed: {}", args.seed);

    let levels = generate_batch(args.seed);
    if let Some(level) = densest_level(&levels) {
        print!("{}", level.render_digits());
    }

    let elapsed_ms = start.elapsed().as_millis();
    println!("Time in ms: {elapsed_ms}");

    if let Some(capture) = capture.as_mut() {
        write_capture(capture, args.seed, levels.len(), elapsed_ms)
            .context("Failed to write timing capture")?;
    }

    Ok(())
}

fn write_capture(
    out: &mut impl Write,
    seed: u32,
    level_count: usize,
    elapsed_ms: u128,
) -> io::Result<()> {
    writeln!(out, "seed: {seed}")?;
    writeln!(out, "levels: {level_count}")?;
    writeln!(out, "elapsed_ms: {elapsed_ms}")
}
