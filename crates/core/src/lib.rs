pub mod mapgen;
pub mod types;

pub use mapgen::{
    BatchGenerator, Level, RandomStream, densest_level, densest_level_index, generate_batch,
};
pub use types::*;
