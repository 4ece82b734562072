//! Batch orchestration: sequential level generation over one shared stream,
//! plus selection of the densest level.

use super::grid::{empty_grid, stamp_room};
use super::model::Level;
use super::rooms::place_rooms;
use super::stream::RandomStream;

/// Levels generated per run.
pub const LEVELS_PER_BATCH: usize = 100;

/// Owns the run-wide random stream and drives level generation with it.
pub struct BatchGenerator {
    stream: RandomStream,
}

impl BatchGenerator {
    pub fn new(seed: u32) -> Self {
        Self { stream: RandomStream::new(seed) }
    }

    /// Generates every level in order. All levels consume the same advancing
    /// stream, so level `i` begins exactly where level `i - 1` stopped and
    /// the batch forms a single continuous pseudo-random trace.
    pub fn generate(mut self) -> Vec<Level> {
        let mut levels = Vec::with_capacity(LEVELS_PER_BATCH);
        for _ in 0..LEVELS_PER_BATCH {
            levels.push(self.generate_level());
        }
        levels
    }

    fn generate_level(&mut self) -> Level {
        let rooms = place_rooms(&mut self.stream);
        let mut tiles = empty_grid();
        for room in &rooms {
            stamp_room(&mut tiles, room);
        }
        Level { tiles, rooms }
    }
}

/// Index of the level with the strictly greatest room count; earlier levels
/// win ties. `None` when no level placed any room.
pub fn densest_level_index(levels: &[Level]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_rooms = 0_usize;
    for (index, level) in levels.iter().enumerate() {
        if level.rooms.len() > best_rooms {
            best_rooms = level.rooms.len();
            best = Some(index);
        }
    }
    best
}

/// The level selected by [`densest_level_index`], ready for rendering.
pub fn densest_level(levels: &[Level]) -> Option<&Level> {
    densest_level_index(levels).map(|index| &levels[index])
}
