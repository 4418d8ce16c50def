//! Spawn policy
//!
//! Evaluated once per Playing tick. Spawning is gated on the newest
//! obstacle having cleared the gate line, which bounds obstacle density
//! regardless of the per-tick probabilities.

use glam::Vec2;
use rand::Rng;

use super::state::{Entity, EntityKind, GameState, ObstacleKind};
use crate::consts::GROUND_Y;

/// Roll the per-tick spawn dice, honoring the spacing gate.
pub fn maybe_spawn(state: &mut GameState) {
    let gate_open = match state.newest_obstacle() {
        None => true,
        Some(o) => o.pos.x < state.tuning.spawn_gate_x,
    };
    if !gate_open {
        return;
    }

    let roll: u32 = state.rng.random_range(0..100);
    if roll < state.tuning.obstacle_chance {
        let x = state.tuning.spawn_x;
        spawn_obstacle(state, x);
    } else if roll < state.tuning.pickup_chance {
        let x = state.tuning.spawn_x;
        spawn_pickup(state, x);
    }
}

/// Spawn one obstacle of random kind at `x`, moving at the current
/// obstacle speed
pub fn spawn_obstacle(state: &mut GameState, x: f32) {
    let kind = if state.rng.random_bool(0.5) {
        ObstacleKind::Cubicle
    } else {
        ObstacleKind::Printer
    };
    let id = state.next_entity_id();
    let vel_x = state.obstacle_speed;
    state.entities.push(Entity {
        id,
        kind: EntityKind::Obstacle(kind),
        pos: Vec2::new(x, GROUND_Y),
        vel_x,
    });
    log::debug!("spawned {kind:?} #{id} at x={x} vel={vel_x}");
}

/// Spawn one coffee pickup at `x`
pub fn spawn_pickup(state: &mut GameState, x: f32) {
    let id = state.next_entity_id();
    let vel_x = state.obstacle_speed;
    state.entities.push(Entity {
        id,
        kind: EntityKind::Pickup,
        pos: Vec2::new(x, GROUND_Y),
        vel_x,
    });
    log::debug!("spawned pickup #{id} at x={x} vel={vel_x}");
}
