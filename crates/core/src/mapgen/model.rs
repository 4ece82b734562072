//! Level model, digit-grid rendering, and canonical encoding.

use crate::types::{Room, TILE_DIM, Tile, TileKind};

/// One generated level: a full tile grid plus the rooms stamped into it.
/// Built in a single pass by the batch driver and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub tiles: Vec<Tile>,
    pub rooms: Vec<Room>,
}

impl Level {
    /// Renders the grid one digit per cell in row-major order, breaking the
    /// line when `index % TILE_DIM == TILE_DIM - 1 && index != 0`. The index
    /// guard cannot fire before index 49, so every row ends with a break.
    pub fn render_digits(&self) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.tiles.len() / TILE_DIM);
        for (index, tile) in self.tiles.iter().enumerate() {
            out.push(tile.kind.digit());
            if index % TILE_DIM == TILE_DIM - 1 && index != 0 {
                out.push('\n');
            }
        }
        out
    }

    /// Stable byte encoding of the whole level, used for fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len() + self.rooms.len() * 20);
        bytes.extend((self.tiles.len() as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile.kind {
                TileKind::Empty => 0,
                TileKind::Floor => 1,
            });
        }
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            for field in [room.x, room.y, room.w, room.h, room.n] {
                bytes.extend((field as u32).to_le_bytes());
            }
        }
        bytes
    }
}
