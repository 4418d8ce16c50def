//! Entity lifecycle: advance, wrap, cull
//!
//! Obstacles and pickups scroll left at the velocity they were given at
//! spawn time and are destroyed once fully off screen. Floor tiles wrap
//! back to the right edge instead, keeping the ground seamless.

use super::state::GameState;
use crate::consts::{FLOOR_TILE_WIDTH, VIEW_WIDTH};

/// Move everything for one tick. `dt` is the frame delta in seconds;
/// ground and background scroll by `game_speed` per tick.
pub fn advance(state: &mut GameState, dt: f32) {
    state.bg_scroll_x += state.game_speed;

    for tile in &mut state.floor_tiles {
        tile.x -= state.game_speed;
        if tile.x + FLOOR_TILE_WIDTH < 0.0 {
            tile.x = VIEW_WIDTH;
        }
    }

    for entity in &mut state.entities {
        entity.pos.x += entity.vel_x * dt;
    }
}

/// Remove entities that have fully scrolled off the left edge. Removal is
/// synchronous with destruction; a culled entity can never be seen by a
/// later overlap report.
pub fn cull(state: &mut GameState) {
    state.entities.retain(|e| {
        if e.off_screen() {
            log::debug!("culled {:?} #{}", e.kind, e.id);
            false
        } else {
            true
        }
    });
}
