//! Tile grid construction and room footprint stamping.

use crate::types::{Room, TILE_DIM, TILES_PER_LEVEL, Tile, TileKind};

/// Fresh all-empty grid with row-major coordinates baked into each cell.
pub(super) fn empty_grid() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILES_PER_LEVEL);
    for index in 0..TILES_PER_LEVEL {
        tiles.push(Tile { x: index % TILE_DIM, y: index / TILE_DIM, kind: TileKind::Empty });
    }
    tiles
}

/// Marks every cell covered by `room` (inclusive extents) as floor. Stamping
/// only ever raises a cell to floor, so room order never changes the result.
pub(super) fn stamp_room(tiles: &mut [Tile], room: &Room) {
    for column in room.x..=room.x + room.w {
        for row in room.y..=room.y + room.h {
            tiles[row * TILE_DIM + column].kind = TileKind::Floor;
        }
    }
}
