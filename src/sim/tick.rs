//! Per-frame simulation tick and game-flow state machine
//!
//! One synchronous tick runs per rendered frame. Home and GameOver frames
//! only watch for input edges; all gameplay stepping happens in `Playing`.

use glam::Vec2;

use super::collision::{self, Overlap};
use super::lifecycle;
use super::progress;
use super::spawn;
use super::state::{BackgroundKey, FlowState, GameEvent, GameState};
use crate::consts::*;

/// Input for a single tick. Key flags carry "just pressed this tick"
/// semantics; the host computes edges so a held key never multi-fires.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Frame delta in wall-clock milliseconds
    pub delta_ms: f64,
    /// Jump/confirm edge (space)
    pub confirm: bool,
    /// Cancel/back edge (escape)
    pub cancel: bool,
    /// Overlaps the host physics layer observed this frame
    pub overlaps: Vec<Overlap>,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.wall_clock_ms += input.delta_ms;

    match state.flow {
        FlowState::Home => {
            if input.confirm {
                start_run(state);
            }
        }
        FlowState::GameOver => {
            if input.confirm {
                start_run(state);
            } else if input.cancel {
                return_home(state);
            }
        }
        FlowState::Playing => step(state, input),
    }
}

/// One gameplay step: clock, score tick, progression, spawning, movement,
/// culling, collision response
fn step(state: &mut GameState, input: &TickInput) {
    state.elapsed_ms += input.delta_ms;

    let fired = state.score_ticker.advance(input.delta_ms);
    if fired > 0 {
        state.score += state.tuning.score_tick_points * fired;
    }

    progress::advance(state);
    spawn::maybe_spawn(state);

    let dt = (input.delta_ms / 1000.0) as f32;
    lifecycle::advance(state, dt);
    lifecycle::cull(state);

    collision::apply(state, &input.overlaps);
}

/// Reset to canonical defaults and enter `Playing`. Shared by the
/// Home → Playing and GameOver → Playing paths.
pub fn start_run(state: &mut GameState) {
    state.score = 0;
    state.lives = MAX_LIVES;
    state.elapsed_ms = 0.0;
    state.level = 1;
    state.game_speed = state.tuning.start_game_speed;
    state.obstacle_speed = state.tuning.start_obstacle_speed;
    state.last_hit_at_ms = None;
    state.game_over = false;
    state.background = BackgroundKey::Office1;
    state.bg_scroll_x = 0.0;
    state.score_ticker.reset();
    state.boost_latch.reset();
    state.player_pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    state.boss_pos = Vec2::new(BOSS_START_X, BOSS_START_Y);

    // Clear the field, then pre-place one obstacle so the opening
    // window is never empty
    state.entities.clear();
    let seed_x = state.tuning.seed_spawn_x;
    spawn::spawn_obstacle(state, seed_x);

    state.flow = FlowState::Playing;
    state.push_event(GameEvent::RunStarted);
    log::info!("run started (seed {})", state.seed);
}

/// GameOver → Home. Partial reset: score/timer and the ticker are
/// cleared; lives and entity positions are not, and reset only on the
/// next Playing transition.
pub fn return_home(state: &mut GameState) {
    state.score = 0;
    state.elapsed_ms = 0.0;
    state.score_ticker.reset();
    state.game_over = false;
    state.flow = FlowState::Home;
    log::info!("returned to home screen");
}

/// Lives exhausted: freeze the world and show the final score. Reached
/// only through the collision response path.
pub(crate) fn enter_game_over(state: &mut GameState) {
    state.game_over = true;
    state.flow = FlowState::GameOver;
    for entity in &mut state.entities {
        entity.vel_x = 0.0;
    }
    state.push_event(GameEvent::CharactersTinted);
    state.push_event(GameEvent::GameOverShown { score: state.score });
    log::info!(
        "game over: score={} time={}",
        state.score,
        crate::format_clock(state.elapsed_ms)
    );
}
