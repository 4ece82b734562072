use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use levgen_core::mapgen::{Level, densest_level_index, generate_batch};
use levgen_core::types::Room;
use serde::Serialize;

/// Batch inspector: regenerates a run and dumps per-level room data as JSON
/// so a layout can be examined without re-reading the digit grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the batch to inspect
    #[arg(short, long, default_value_t = 18)]
    seed: u32,

    /// Write the JSON summary to this path instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Serialize)]
struct LevelSummary {
    index: usize,
    room_count: usize,
    rooms: Vec<Room>,
}

#[derive(Serialize)]
struct BatchSummary {
    seed: u32,
    selected_index: Option<usize>,
    levels: Vec<LevelSummary>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let levels = generate_batch(args.seed);
    let summary = summarize(args.seed, &levels);

    let json =
        serde_json::to_string_pretty(&summary).context("Failed to serialize batch summary")?;
    match &args.out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write summary file: {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}

fn summarize(seed: u32, levels: &[Level]) -> BatchSummary {
    BatchSummary {
        seed,
        selected_index: densest_level_index(levels),
        levels: levels
            .iter()
            .enumerate()
            .map(|(index, level)| LevelSummary {
                index,
                room_count: level.rooms.len(),
                rooms: level.rooms.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_every_level_and_the_selected_index() {
        let levels = generate_batch(18);
        let summary = summarize(18, &levels);

        assert_eq!(summary.seed, 18);
        assert_eq!(summary.levels.len(), levels.len());
        assert_eq!(summary.selected_index, Some(94));
        for (entry, level) in summary.levels.iter().zip(&levels) {
            assert_eq!(entry.room_count, level.rooms.len());
            assert_eq!(entry.rooms, level.rooms);
        }
    }

    #[test]
    fn summary_serializes_room_fields_by_name() {
        let levels = generate_batch(18);
        let summary = summarize(18, &levels);

        let json = serde_json::to_string(&summary).expect("summary should serialize");
        assert!(json.contains("\"selected_index\":94"));
        assert!(json.contains("\"room_count\""));
        assert!(json.contains("\"w\""));
    }

    #[test]
    fn written_summary_file_parses_back_as_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("batch.json");

        let levels = generate_batch(7);
        let summary = summarize(7, &levels);
        let json = serde_json::to_string_pretty(&summary).expect("serialize");
        fs::write(&path, &json).expect("write");

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(value["seed"], 7);
        assert_eq!(value["levels"].as_array().map(Vec::len), Some(levels.len()));
    }
}
