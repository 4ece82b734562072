//! Room placement with margin-based collision rejection.

use crate::types::{Room, TILE_DIM};

use super::stream::RandomStream;

/// Smallest candidate extent; extents land in
/// `ROOM_EXTENT_MIN..ROOM_EXTENT_MIN + ROOM_EXTENT_SPAN`.
pub const ROOM_EXTENT_MIN: usize = 2;

/// Modulus applied to raw draws before the minimum extent is added.
pub const ROOM_EXTENT_SPAN: usize = 8;

/// In-bounds attempts allowed per level before placement stops. The early
/// exit watches this counter, not the accepted-room count, so a level can
/// finish with fewer rooms than the budget.
pub const ATTEMPT_BUDGET: usize = 99;

/// Hard cap on candidate draws per level, a safety bound for seeds that
/// never reach the attempt budget.
pub(super) const CANDIDATE_CAP: usize = 50_000;

/// Runs the placement loop for one level, consuming four stream draws per
/// candidate whether or not the candidate survives.
pub(super) fn place_rooms(stream: &mut RandomStream) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(ATTEMPT_BUDGET);
    let mut attempts = 0_usize;

    for _ in 0..CANDIDATE_CAP {
        let x = stream.next_value() as usize % TILE_DIM;
        let y = stream.next_value() as usize % TILE_DIM;
        let w = stream.next_value() as usize % ROOM_EXTENT_SPAN + ROOM_EXTENT_MIN;
        let h = stream.next_value() as usize % ROOM_EXTENT_SPAN + ROOM_EXTENT_MIN;

        // Out-of-bounds candidates are discarded before the attempt counter
        // moves; only in-bounds candidates consume a tag.
        if x + w >= TILE_DIM || y + h >= TILE_DIM || x == 0 || y == 0 {
            continue;
        }

        let tag = attempts;
        attempts += 1;
        if !collides_with_any(&rooms, x, y, w, h) {
            rooms.push(Room { x, y, w, h, n: tag });
        }

        if attempts == ATTEMPT_BUDGET {
            break;
        }
    }

    rooms
}

pub(super) fn collides_with_any(rooms: &[Room], x: usize, y: usize, w: usize, h: usize) -> bool {
    rooms.iter().any(|room| touches_with_margin(room, x, y, w, h))
}

/// True when the candidate rectangle overlaps `existing` after `existing` is
/// expanded by the one-tile placement margin on every side.
fn touches_with_margin(existing: &Room, x: usize, y: usize, w: usize, h: usize) -> bool {
    if existing.x + existing.w + 1 < x || existing.x > x + w + 1 {
        return false;
    }
    if existing.y + existing.h + 1 < y || existing.y > y + h + 1 {
        return false;
    }
    true
}
