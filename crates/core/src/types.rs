use serde::{Deserialize, Serialize};

/// Grid edge length; every level grid is a `TILE_DIM` x `TILE_DIM` cell matrix.
pub const TILE_DIM: usize = 50;

/// Cells per level grid, stored row-major (`index = y * TILE_DIM + x`).
pub const TILES_PER_LEVEL: usize = TILE_DIM * TILE_DIM;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Empty,
    Floor,
}

impl TileKind {
    /// Character emitted for this cell by the digit-grid renderer.
    pub fn digit(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Floor => '1',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
    pub kind: TileKind,
}

/// Axis-aligned room rectangle with inclusive extents: the room occupies
/// columns `x..=x + w` and rows `y..=y + h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
    /// In-bounds attempt tag at acceptance time. Candidates rejected by the
    /// margin test still consume a tag, so tags across a level's rooms are
    /// increasing but not contiguous.
    pub n: usize,
}
