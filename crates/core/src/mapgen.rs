//! Deterministic level-batch generation split into coherent submodules.

pub mod model;
pub mod stream;

mod batch;
mod grid;
mod rooms;

pub use batch::{BatchGenerator, LEVELS_PER_BATCH, densest_level, densest_level_index};
pub use model::Level;
pub use rooms::{ATTEMPT_BUDGET, ROOM_EXTENT_MIN, ROOM_EXTENT_SPAN};
pub use stream::RandomStream;

/// Generates the full batch for `seed` and returns every level in order.
pub fn generate_batch(seed: u32) -> Vec<Level> {
    BatchGenerator::new(seed).generate()
}
